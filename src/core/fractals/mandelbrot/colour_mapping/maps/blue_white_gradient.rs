use crate::core::actions::rasterize_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Real;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::{MandelbrotColourMap, escape_fraction};

#[derive(Debug)]
pub struct MandelbrotBlueWhiteGradient {
    max_iterations: u32,
}

impl ColourMap<Real> for MandelbrotBlueWhiteGradient {
    fn map(&self, value: Real) -> Colour {
        let Some(t) = escape_fraction(value, self.max_iterations) else {
            return Colour::BLACK;
        };

        // Bernstein-style polynomials peaking at different points of the range
        let r = 9.0 * (1.0 - t) * t * t * t * 255.0;
        let g = 15.0 * (1.0 - t) * (1.0 - t) * t * t * 255.0;
        let b = 8.5 * (1.0 - t) * (1.0 - t) * (1.0 - t) * t * 255.0;

        Colour {
            r: r as u8,
            g: g as u8,
            b: b as u8,
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotBlueWhiteGradient {
    fn kind(&self) -> MandelbrotColourMapKind {
        MandelbrotColourMapKind::BlueWhiteGradient
    }
}

impl MandelbrotBlueWhiteGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
