use std::ops::{Add, Mul};

/// Widest stable floating-point type available; every plane coordinate and
/// escape value is carried in this precision.
pub type Real = f64;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: Real,
    pub imag: Real,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub fn new(real: Real, imag: Real) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> Real {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        assert_eq!(Complex::new(3.0, 4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::new(-3.0, -4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::ZERO.magnitude_squared(), 0.0);
    }

    #[test]
    fn test_add() {
        let result = Complex::new(1.0, 2.0) + Complex::new(-3.0, -7.0);

        assert_eq!(result, Complex::new(-2.0, -5.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i) * (3 + 4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let result = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);

        assert_eq!(result, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_square_matches_escape_map_terms() {
        // z² has real part x² - y² and imaginary part 2xy
        let z = Complex::new(0.3, -0.7);
        let squared = z * z;

        assert_eq!(squared.real, 0.3 * 0.3 - (-0.7) * (-0.7));
        assert_eq!(squared.imag, 2.0 * 0.3 * -0.7);
    }

    #[test]
    fn test_is_finite() {
        assert!(Complex::new(-0.74, 0.13).is_finite());
        assert!(!Complex::new(Real::NAN, 0.0).is_finite());
        assert!(!Complex::new(0.0, Real::INFINITY).is_finite());
    }
}
