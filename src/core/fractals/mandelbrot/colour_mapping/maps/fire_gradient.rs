use crate::core::actions::rasterize_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Real;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::{MandelbrotColourMap, escape_fraction};

#[derive(Debug)]
pub struct MandelbrotFireGradient {
    max_iterations: u32,
}

impl ColourMap<Real> for MandelbrotFireGradient {
    fn map(&self, value: Real) -> Colour {
        let Some(t) = escape_fraction(value, self.max_iterations) else {
            return Colour::BLACK;
        };

        // black -> red -> orange -> yellow -> white, a quarter of the range each
        let (r, g, b) = if t < 0.25 {
            let local_t = t / 0.25;
            (local_t * 255.0, 0.0, 0.0)
        } else if t < 0.5 {
            let local_t = (t - 0.25) / 0.25;
            (255.0, local_t * 165.0, 0.0)
        } else if t < 0.75 {
            let local_t = (t - 0.5) / 0.25;
            (255.0, 165.0 + local_t * 90.0, 0.0)
        } else {
            let local_t = (t - 0.75) / 0.25;
            (255.0, 255.0, local_t * 255.0)
        };

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

impl MandelbrotColourMap for MandelbrotFireGradient {
    fn kind(&self) -> MandelbrotColourMapKind {
        MandelbrotColourMapKind::FireGradient
    }
}

impl MandelbrotFireGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
