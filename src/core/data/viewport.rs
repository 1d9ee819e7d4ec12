use crate::core::data::complex::{Complex, Real};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidSize { width: Real, height: Real },
    NonFiniteCenter { center: Complex },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "viewport size must be finite and positive: {}x{}",
                    width, height
                )
            }
            Self::NonFiniteCenter { center } => {
                write!(
                    f,
                    "viewport center must be finite: ({}, {})",
                    center.real, center.imag
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// Rectangle of the complex plane mapped onto one frame's pixel grid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    width: Real,
    height: Real,
}

impl Viewport {
    pub fn new(center: Complex, width: Real, height: Real) -> Result<Self, ViewportError> {
        if !center.is_finite() {
            return Err(ViewportError::NonFiniteCenter { center });
        }

        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self {
            center,
            width,
            height,
        })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn width(&self) -> Real {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> Real {
        self.height
    }

    #[must_use]
    pub fn x_start(&self) -> Real {
        self.center.real - self.width / 2.0
    }

    #[must_use]
    pub fn y_start(&self) -> Real {
        self.center.imag - self.height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new_valid() {
        let center = Complex::new(-0.5, 0.0);
        let viewport = Viewport::new(center, 3.5, 2.0).unwrap();

        assert_eq!(viewport.center(), center);
        assert_eq!(viewport.width(), 3.5);
        assert_eq!(viewport.height(), 2.0);
    }

    #[test]
    fn test_viewport_start_is_top_left_corner() {
        let viewport = Viewport::new(Complex::new(-0.5, 0.0), 3.5, 2.0).unwrap();

        assert_eq!(viewport.x_start(), -2.25);
        assert_eq!(viewport.y_start(), -1.0);
    }

    #[test]
    fn test_viewport_dimensions_must_be_positive() {
        let center = Complex::ZERO;

        assert_eq!(
            Viewport::new(center, 0.0, 1.0),
            Err(ViewportError::InvalidSize {
                width: 0.0,
                height: 1.0
            })
        );
        assert_eq!(
            Viewport::new(center, 1.0, -2.0),
            Err(ViewportError::InvalidSize {
                width: 1.0,
                height: -2.0
            })
        );
        assert!(matches!(
            Viewport::new(center, Real::INFINITY, 1.0),
            Err(ViewportError::InvalidSize { .. })
        ));
        assert!(matches!(
            Viewport::new(center, Real::NAN, 1.0),
            Err(ViewportError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_viewport_center_must_be_finite() {
        let result = Viewport::new(Complex::new(Real::NAN, 0.0), 1.0, 1.0);

        assert!(matches!(result, Err(ViewportError::NonFiniteCenter { .. })));
    }
}
