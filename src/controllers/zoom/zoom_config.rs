use std::error::Error;
use std::fmt;

use crate::core::actions::zoom_sequence::run_zoom_sequence::SinkFailurePolicy;
use crate::core::actions::zoom_sequence::zoom_schedule::ZoomSchedule;
use crate::core::data::canvas::{Canvas, CanvasError};
use crate::core::data::complex::{Complex, Real};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKind;

pub const DEFAULT_CANVAS_WIDTH: u32 = 1920;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 1080;
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;
pub const DEFAULT_INITIAL_SCALE: Real = 1.0;
pub const DEFAULT_ZOOM_FACTOR: Real = 0.96;
pub const DEFAULT_TOTAL_FRAMES: u32 = 9999;
pub const DEFAULT_BASE_WIDTH: Real = 3.5;

/// Seahorse Valley.
pub const DEFAULT_CENTER: Complex = Complex {
    real: -0.743643887037151,
    imag: 0.131825904205330,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomConfigError {
    Canvas(CanvasError),
    ZeroMaxIterations,
    InvalidInitialScale(Real),
    InvalidZoomFactor(Real),
    InvalidBaseWidth(Real),
    NonFiniteCenter(Complex),
    ZeroWorkerThreads,
}

impl fmt::Display for ZoomConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas(err) => write!(f, "{}", err),
            Self::ZeroMaxIterations => write!(f, "max_iterations must be greater than zero"),
            Self::InvalidInitialScale(scale) => {
                write!(f, "initial_scale must be finite and positive, got {}", scale)
            }
            Self::InvalidZoomFactor(factor) => {
                write!(f, "zoom_factor must be finite and positive, got {}", factor)
            }
            Self::InvalidBaseWidth(width) => {
                write!(f, "base_width must be finite and positive, got {}", width)
            }
            Self::NonFiniteCenter(center) => write!(
                f,
                "center must be finite, got ({}, {})",
                center.real, center.imag
            ),
            Self::ZeroWorkerThreads => write!(f, "worker_threads must be greater than zero"),
        }
    }
}

impl Error for ZoomConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Canvas(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CanvasError> for ZoomConfigError {
    fn from(err: CanvasError) -> Self {
        Self::Canvas(err)
    }
}

/// Fixed parameters of one zoom run. Build with struct-update syntax over
/// [`ZoomConfig::default`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub max_iterations: u32,
    pub initial_scale: Real,
    pub zoom_factor: Real,
    pub total_frames: u32,
    pub center: Complex,
    pub base_width: Real,
    /// `None` uses every available core.
    pub worker_threads: Option<usize>,
    pub colour_map_kind: MandelbrotColourMapKind,
    pub sink_failure_policy: SinkFailurePolicy,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            initial_scale: DEFAULT_INITIAL_SCALE,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            total_frames: DEFAULT_TOTAL_FRAMES,
            center: DEFAULT_CENTER,
            base_width: DEFAULT_BASE_WIDTH,
            worker_threads: None,
            colour_map_kind: MandelbrotColourMapKind::default(),
            sink_failure_policy: SinkFailurePolicy::default(),
        }
    }
}

fn is_positive(value: Real) -> bool {
    value.is_finite() && value > 0.0
}

impl ZoomConfig {
    pub fn validate(&self) -> Result<(), ZoomConfigError> {
        self.canvas()?;

        if self.max_iterations == 0 {
            return Err(ZoomConfigError::ZeroMaxIterations);
        }

        if !is_positive(self.initial_scale) {
            return Err(ZoomConfigError::InvalidInitialScale(self.initial_scale));
        }

        if !is_positive(self.zoom_factor) {
            return Err(ZoomConfigError::InvalidZoomFactor(self.zoom_factor));
        }

        if !is_positive(self.base_width) {
            return Err(ZoomConfigError::InvalidBaseWidth(self.base_width));
        }

        if !self.center.is_finite() {
            return Err(ZoomConfigError::NonFiniteCenter(self.center));
        }

        if self.worker_threads == Some(0) {
            return Err(ZoomConfigError::ZeroWorkerThreads);
        }

        Ok(())
    }

    pub fn canvas(&self) -> Result<Canvas, CanvasError> {
        Canvas::new(self.canvas_width, self.canvas_height)
    }

    #[must_use]
    pub fn schedule(&self) -> ZoomSchedule {
        ZoomSchedule::new(
            self.center,
            self.base_width,
            self.initial_scale,
            self.zoom_factor,
        )
    }
}
