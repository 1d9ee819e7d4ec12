use crate::core::data::colour::Colour;
use crate::core::data::complex::Real;

/// Sector-based HSV to RGB conversion.
///
/// `hue` is in degrees and is wrapped into `[0, 360)`; `saturation` and
/// `value` are expected in `[0, 1]`. Channels are rounded to nearest and
/// clamped to the 8-bit range.
#[must_use]
pub fn hsv_to_rgb(hue: Real, saturation: Real, value: Real) -> Colour {
    let chroma = value * saturation;
    let sector = hue.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - ((sector % 2.0) - 1.0).abs());

    let (r, g, b) = if sector < 1.0 {
        (chroma, x, 0.0)
    } else if sector < 2.0 {
        (x, chroma, 0.0)
    } else if sector < 3.0 {
        (0.0, chroma, x)
    } else if sector < 4.0 {
        (0.0, x, chroma)
    } else if sector < 5.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };

    let m = value - chroma;

    Colour {
        r: to_channel(r + m),
        g: to_channel(g + m),
        b: to_channel(b + m),
    }
}

#[inline]
fn to_channel(unit: Real) -> u8 {
    (unit * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Colour { r: 255, g: 0, b: 0 });
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Colour { r: 0, g: 255, b: 0 });
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Colour { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_secondary_hues() {
        assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0), Colour { r: 255, g: 255, b: 0 });
        assert_eq!(hsv_to_rgb(180.0, 1.0, 1.0), Colour { r: 0, g: 255, b: 255 });
        assert_eq!(hsv_to_rgb(300.0, 1.0, 1.0), Colour { r: 255, g: 0, b: 255 });
    }

    #[test]
    fn test_mid_sector_rounds_to_nearest() {
        // hue 30: x = 0.5 -> 127.5 + 0.5 = 128
        assert_eq!(hsv_to_rgb(30.0, 1.0, 1.0), Colour { r: 255, g: 128, b: 0 });
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        assert_eq!(
            hsv_to_rgb(200.0, 0.0, 0.5),
            Colour {
                r: 128,
                g: 128,
                b: 128
            }
        );
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(-120.0, 1.0, 1.0), hsv_to_rgb(240.0, 1.0, 1.0));
    }

    #[test]
    fn test_zero_value_is_black() {
        assert_eq!(hsv_to_rgb(90.0, 1.0, 0.0), Colour::BLACK);
    }
}
