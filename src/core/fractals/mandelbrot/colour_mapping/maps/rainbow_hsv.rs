use crate::core::actions::rasterize_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Real;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::{MandelbrotColourMap, escape_fraction};
use crate::core::util::hsv_to_rgb::hsv_to_rgb;

/// Full-saturation hue sweep keyed to escape speed: one trip around the
/// colour wheel across the whole iteration range.
#[derive(Debug)]
pub struct MandelbrotRainbowHsv {
    max_iterations: u32,
}

impl ColourMap<Real> for MandelbrotRainbowHsv {
    fn map(&self, value: Real) -> Colour {
        let Some(t) = escape_fraction(value, self.max_iterations) else {
            return Colour::BLACK;
        };

        let hue = (t * 360.0) % 360.0;

        hsv_to_rgb(hue, 1.0, 1.0)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotRainbowHsv {
    fn kind(&self) -> MandelbrotColourMapKind {
        MandelbrotColourMapKind::RainbowHsv
    }
}

impl MandelbrotRainbowHsv {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
