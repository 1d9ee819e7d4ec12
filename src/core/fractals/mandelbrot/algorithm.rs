use crate::core::actions::rasterize_frame::ports::escape_time::EscapeTimeAlgorithm;
use crate::core::data::complex::{Complex, Real};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use std::f64::consts::LN_2;

/// Squared escape radius: an orbit that leaves |z| <= 2 never returns.
pub const ESCAPE_RADIUS_SQUARED: Real = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }
}

impl EscapeTimeAlgorithm for MandelbrotAlgorithm {
    fn evaluate(&self, c: Complex) -> Real {
        let mut z = Complex::ZERO;
        let mut iteration = 0;

        while z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED && iteration < self.max_iterations {
            z = z * z + c;
            iteration += 1;
        }

        // Escaping on the final permitted step still counts as interior.
        if iteration == self.max_iterations {
            return Real::from(self.max_iterations);
        }

        smooth_iteration_count(iteration, z.magnitude_squared())
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

/// Renormalised iteration count, removing the banding between whole
/// iteration counts. Never negative.
#[must_use]
pub fn smooth_iteration_count(iteration: u32, magnitude_squared: Real) -> Real {
    let log_zn = magnitude_squared.ln() * 0.5;
    let nu = (log_zn / LN_2).ln() / LN_2;

    (Real::from(iteration) + 1.0 - nu).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn algorithm(max_iterations: u32) -> MandelbrotAlgorithm {
        MandelbrotAlgorithm::new(max_iterations).unwrap()
    }

    #[test]
    fn test_valid_constructor() {
        assert_eq!(algorithm(1000).max_iterations(), 1000);
    }

    #[test]
    fn test_zero_max_iterations_is_rejected() {
        assert_eq!(
            MandelbrotAlgorithm::new(0),
            Err(MandelbrotError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(algorithm(1000).evaluate(Complex::ZERO), 1000.0);
        assert_eq!(algorithm(50).evaluate(Complex::ZERO), 50.0);
    }

    #[test]
    fn test_main_cardioid_points_never_escape() {
        let alg = algorithm(500);

        for c in [
            Complex::new(-0.5, 0.0),
            Complex::new(0.2, 0.2),
            Complex::new(-1.0, 0.0), // period-2 bulb
        ] {
            assert_eq!(alg.evaluate(c), 500.0);
        }
    }

    #[test]
    fn test_far_samples_escape_below_two() {
        let alg = algorithm(1000);

        for c in [
            Complex::new(3.0, 0.0),
            Complex::new(-2.5, 0.0),
            Complex::new(0.0, 2.1),
            Complex::new(2.0, 2.0),
            Complex::new(-10.0, 7.0),
            Complex::new(1e12, -1e12),
        ] {
            let value = alg.evaluate(c);

            assert!(value < 2.0, "c={:?} gave {}", c, value);
            assert!(value >= 0.0, "c={:?} gave {}", c, value);
        }
    }

    #[test]
    fn test_smoothing_formula_for_known_escape() {
        // c = 3: one step reaches z = 3, |z|² = 9
        let expected = 2.0 - (3.0_f64.ln() / LN_2).ln() / LN_2;

        assert!((algorithm(100).evaluate(Complex::new(3.0, 0.0)) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_exterior_values_are_below_max() {
        // c = 0.5 walks 0.5, 0.75, 1.06, 1.63, 3.15 before escaping
        let value = algorithm(64).evaluate(Complex::new(0.5, 0.0));

        assert!(value > 5.0);
        assert!(value < 6.0);
    }

    #[test]
    fn test_escape_on_final_step_counts_as_interior() {
        // c = 3 escapes on the first update; with a one-iteration cap that
        // update is also the last permitted one
        assert_eq!(algorithm(1).evaluate(Complex::new(3.0, 0.0)), 1.0);
    }

    #[test]
    fn test_smooth_iteration_count_is_continuous_across_bands() {
        // |z|² = 4 is the bottom of the band: no correction
        assert!((smooth_iteration_count(5, 4.0) - 6.0).abs() < 1e-12);
        // |z|² = 16 is what the next band starts from after one more squaring
        assert!((smooth_iteration_count(5, 16.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_smooth_iteration_count_is_clamped_at_zero() {
        assert_eq!(smooth_iteration_count(0, 1e300), 0.0);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let alg = algorithm(1000);
        let c = Complex::new(-0.743643887037151, 0.131825904205330);

        assert_eq!(alg.evaluate(c), alg.evaluate(c));
    }
}
