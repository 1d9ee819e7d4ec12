use crate::core::actions::rasterize_frame::ports::colour_map::ColourMap;
use crate::core::actions::rasterize_frame::ports::escape_time::EscapeTimeAlgorithm;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Real;
use crate::core::util::pixel_to_complex_coords::PixelToComplex;

pub const SUBSAMPLES_PER_PIXEL: usize = 4;

/// 2x2 grid of sub-sample offsets within one pixel cell.
pub const SUBSAMPLE_OFFSETS: [(Real, Real); SUBSAMPLES_PER_PIXEL] =
    [(0.0, 0.0), (0.0, 0.5), (0.5, 0.0), (0.5, 0.5)];

/// Anti-aliased colour of pixel `(x, y)`.
#[inline]
pub fn supersample_pixel<Alg, CMap>(
    x: u32,
    y: u32,
    mapping: &PixelToComplex,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Colour
where
    Alg: EscapeTimeAlgorithm + ?Sized,
    CMap: ColourMap<Real> + ?Sized,
{
    let samples = SUBSAMPLE_OFFSETS.map(|(dx, dy)| {
        let escape = algorithm.evaluate(mapping.map(x, y, dx, dy));
        colour_map.map(escape)
    });

    average_colours(&samples)
}

/// Per-channel mean, rounded half up.
#[must_use]
pub fn average_colours(samples: &[Colour; SUBSAMPLES_PER_PIXEL]) -> Colour {
    let count = SUBSAMPLES_PER_PIXEL as u16;
    let mean = |channel: fn(&Colour) -> u8| {
        let sum: u16 = samples.iter().map(|c| u16::from(channel(c))).sum();
        ((sum + count / 2) / count) as u8
    };

    Colour {
        r: mean(|c| c.r),
        g: mean(|c| c.g),
        b: mean(|c| c.b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::canvas::Canvas;
    use crate::core::data::complex::Complex;
    use crate::core::data::viewport::Viewport;
    use std::sync::Mutex;

    fn grey(v: u8) -> Colour {
        Colour { r: v, g: v, b: v }
    }

    #[test]
    fn test_average_of_identical_colours_is_unchanged() {
        let red = Colour { r: 255, g: 0, b: 0 };

        assert_eq!(average_colours(&[red; 4]), red);
    }

    #[test]
    fn test_average_rounds_to_nearest() {
        // 10 + 11 + 11 + 11 = 43 -> 10.75 -> 11
        assert_eq!(average_colours(&[grey(10), grey(11), grey(11), grey(11)]), grey(11));
        // 10 + 10 + 10 + 11 = 41 -> 10.25 -> 10
        assert_eq!(average_colours(&[grey(10), grey(10), grey(10), grey(11)]), grey(10));
    }

    #[test]
    fn test_average_rounds_half_up() {
        // 0 + 0 + 1 + 1 = 2 -> 0.5 -> 1
        assert_eq!(average_colours(&[grey(0), grey(0), grey(1), grey(1)]), grey(1));
    }

    #[test]
    fn test_average_channels_are_independent() {
        let samples = [
            Colour { r: 255, g: 0, b: 3 },
            Colour { r: 255, g: 0, b: 0 },
            Colour { r: 0, g: 255, b: 0 },
            Colour { r: 0, g: 1, b: 0 },
        ];

        // r: 510/4 = 127.5 -> 128, g: 256/4 = 64, b: 3/4 = 0.75 -> 1
        assert_eq!(average_colours(&samples), Colour { r: 128, g: 64, b: 1 });
    }

    #[test]
    fn test_average_does_not_overflow_at_full_scale() {
        assert_eq!(average_colours(&[grey(255); 4]), grey(255));
    }

    struct RecordingAlgorithm {
        samples: Mutex<Vec<Complex>>,
    }

    impl EscapeTimeAlgorithm for RecordingAlgorithm {
        fn evaluate(&self, sample: Complex) -> Real {
            self.samples.lock().unwrap().push(sample);
            0.0
        }

        fn max_iterations(&self) -> u32 {
            1
        }
    }

    struct ContrivedColourMap {}

    impl ColourMap<Real> for ContrivedColourMap {
        fn map(&self, _: Real) -> Colour {
            grey(9)
        }

        fn display_name(&self) -> &str {
            "Contrived"
        }
    }

    #[test]
    fn test_supersample_visits_the_four_sub_pixel_positions() {
        let algorithm = RecordingAlgorithm {
            samples: Mutex::new(Vec::new()),
        };
        let mapping = PixelToComplex::new(
            Viewport::new(Complex::ZERO, 4.0, 4.0).unwrap(),
            Canvas::new(4, 4).unwrap(),
        );

        let colour = supersample_pixel(1, 2, &mapping, &algorithm, &ContrivedColourMap {});
        let samples = algorithm.samples.into_inner().unwrap();

        assert_eq!(colour, grey(9));
        assert_eq!(
            samples,
            vec![
                Complex::new(-1.0, 0.0),
                Complex::new(-1.0, 0.5),
                Complex::new(-0.5, 0.0),
                Complex::new(-0.5, 0.5),
            ]
        );
    }
}
