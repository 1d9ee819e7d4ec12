use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::MandelbrotColourMapKind,
    map::MandelbrotColourMap,
    maps::{
        blue_white_gradient::MandelbrotBlueWhiteGradient, fire_gradient::MandelbrotFireGradient,
        rainbow_hsv::MandelbrotRainbowHsv,
    },
};

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKind,
    max_iterations: u32,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKind::RainbowHsv => Box::new(MandelbrotRainbowHsv::new(max_iterations)),
        MandelbrotColourMapKind::FireGradient => {
            Box::new(MandelbrotFireGradient::new(max_iterations))
        }
        MandelbrotColourMapKind::BlueWhiteGradient => {
            Box::new(MandelbrotBlueWhiteGradient::new(max_iterations))
        }
    }
}
