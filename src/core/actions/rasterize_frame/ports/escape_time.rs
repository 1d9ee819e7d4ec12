use crate::core::data::complex::{Complex, Real};

pub trait EscapeTimeAlgorithm: Send + Sync {
    /// Continuous escape value for `sample`, in `[0, max_iterations]`.
    /// Exactly `max_iterations` means the sample never escaped.
    fn evaluate(&self, sample: Complex) -> Real;

    fn max_iterations(&self) -> u32;
}
