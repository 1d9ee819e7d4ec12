use rayon::ThreadPoolBuildError;
use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;

use crate::controllers::zoom::zoom_config::{ZoomConfig, ZoomConfigError};
use crate::core::actions::zoom_sequence::ports::frame_sink::FrameSink;
use crate::core::actions::zoom_sequence::run_zoom_sequence::{
    ZoomSequence, ZoomSequenceError, ZoomSummary,
};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::worker_pool::{build_worker_pool, default_worker_threads};

#[derive(Debug)]
pub enum ZoomControllerError {
    Config(ZoomConfigError),
    WorkerPool(ThreadPoolBuildError),
    Mandelbrot(MandelbrotError),
    Sequence(ZoomSequenceError),
}

impl fmt::Display for ZoomControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid zoom configuration: {}", err),
            Self::WorkerPool(err) => write!(f, "could not build worker pool: {}", err),
            Self::Mandelbrot(err) => write!(f, "{}", err),
            Self::Sequence(err) => write!(f, "zoom sequence failed at {}", err),
        }
    }
}

impl Error for ZoomControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::WorkerPool(err) => Some(err),
            Self::Mandelbrot(err) => Some(err),
            Self::Sequence(err) => Some(err),
        }
    }
}

impl From<ZoomConfigError> for ZoomControllerError {
    fn from(err: ZoomConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ThreadPoolBuildError> for ZoomControllerError {
    fn from(err: ThreadPoolBuildError) -> Self {
        Self::WorkerPool(err)
    }
}

impl From<MandelbrotError> for ZoomControllerError {
    fn from(err: MandelbrotError) -> Self {
        Self::Mandelbrot(err)
    }
}

impl From<ZoomSequenceError> for ZoomControllerError {
    fn from(err: ZoomSequenceError) -> Self {
        Self::Sequence(err)
    }
}

pub struct ZoomController<S: FrameSink> {
    config: ZoomConfig,
    sink: S,
}

impl<S: FrameSink> ZoomController<S> {
    pub fn new(config: ZoomConfig, sink: S) -> Self {
        Self { config, sink }
    }

    pub fn run(&self) -> Result<ZoomSummary, ZoomControllerError> {
        let config = &self.config;
        config.validate()?;

        let canvas = config.canvas().map_err(ZoomConfigError::from)?;
        let threads = config
            .worker_threads
            .and_then(NonZeroUsize::new)
            .unwrap_or_else(default_worker_threads);

        log::info!("Rendering Mandelbrot zoom...");
        log::info!("Image size: {}x{}", canvas.width(), canvas.height());
        log::info!("Max iterations: {}", config.max_iterations);
        log::info!(
            "Zoom: {} frames from scale {} by factor {} towards ({}, {})",
            config.total_frames,
            config.initial_scale,
            config.zoom_factor,
            config.center.real,
            config.center.imag
        );
        log::info!("Colour map: {}", config.colour_map_kind);
        log::info!("Threads: {}", threads);

        let pool = build_worker_pool(threads)?;
        let algorithm = MandelbrotAlgorithm::new(config.max_iterations)?;
        let colour_map = mandelbrot_colour_map_factory(config.colour_map_kind, config.max_iterations);

        let sequence = ZoomSequence::new(
            config.schedule(),
            canvas,
            config.total_frames,
            config.sink_failure_policy,
        );
        let summary = sequence.run(&algorithm, &colour_map, &pool, &self.sink)?;

        log::info!(
            "Wrote {} of {} frames in {:?}",
            summary.frames_written,
            config.total_frames,
            summary.elapsed
        );

        if !summary.skipped_frames.is_empty() {
            log::warn!("Skipped frames: {:?}", summary.skipped_frames);
        }

        Ok(summary)
    }
}
