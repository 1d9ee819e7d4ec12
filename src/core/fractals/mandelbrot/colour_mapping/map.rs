use crate::core::actions::rasterize_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Real;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKind;

pub trait MandelbrotColourMap: ColourMap<Real> {
    fn kind(&self) -> MandelbrotColourMapKind;
}

impl ColourMap<Real> for Box<dyn MandelbrotColourMap> {
    fn map(&self, value: Real) -> Colour {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

/// Position of an exterior escape value within the iteration range, or
/// `None` for interior points that every palette paints black.
#[must_use]
pub(crate) fn escape_fraction(value: Real, max_iterations: u32) -> Option<Real> {
    let max = Real::from(max_iterations);

    if value >= max {
        None
    } else {
        Some((value / max).max(0.0))
    }
}
