use rayon::ThreadPool;
use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

use crate::core::actions::rasterize_frame::ports::colour_map::ColourMap;
use crate::core::actions::rasterize_frame::ports::escape_time::EscapeTimeAlgorithm;
use crate::core::actions::rasterize_frame::rasterize_frame::rasterize_frame;
use crate::core::actions::zoom_sequence::ports::frame_sink::{FrameSink, FrameSinkError};
use crate::core::actions::zoom_sequence::zoom_schedule::ZoomSchedule;
use crate::core::data::canvas::Canvas;
use crate::core::data::complex::Real;
use crate::core::data::frame_buffer::FrameBufferError;
use crate::core::data::viewport::ViewportError;

/// What to do when the sink rejects a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkFailurePolicy {
    /// Stop the run and report the failing frame.
    #[default]
    Abort,
    /// Log the failure, record the frame index and carry on with the next frame.
    SkipFrame,
}

#[derive(Debug)]
pub enum ZoomSequenceError {
    Viewport {
        frame_index: u32,
        source: ViewportError,
    },
    FrameBuffer {
        frame_index: u32,
        source: FrameBufferError,
    },
    Sink {
        frame_index: u32,
        source: FrameSinkError,
    },
}

impl ZoomSequenceError {
    #[must_use]
    pub fn frame_index(&self) -> u32 {
        match self {
            Self::Viewport { frame_index, .. }
            | Self::FrameBuffer { frame_index, .. }
            | Self::Sink { frame_index, .. } => *frame_index,
        }
    }
}

impl fmt::Display for ZoomSequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport {
                frame_index,
                source,
            } => write!(f, "frame {}: viewport error: {}", frame_index, source),
            Self::FrameBuffer {
                frame_index,
                source,
            } => write!(f, "frame {}: frame buffer error: {}", frame_index, source),
            Self::Sink {
                frame_index,
                source,
            } => write!(f, "frame {}: frame sink error: {}", frame_index, source),
        }
    }
}

impl Error for ZoomSequenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport { source, .. } => Some(source),
            Self::FrameBuffer { source, .. } => Some(source),
            Self::Sink { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ZoomSummary {
    pub frames_written: u32,
    pub skipped_frames: Vec<u32>,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSequence {
    schedule: ZoomSchedule,
    canvas: Canvas,
    total_frames: u32,
    sink_failure_policy: SinkFailurePolicy,
}

impl ZoomSequence {
    #[must_use]
    pub fn new(
        schedule: ZoomSchedule,
        canvas: Canvas,
        total_frames: u32,
        sink_failure_policy: SinkFailurePolicy,
    ) -> Self {
        Self {
            schedule,
            canvas,
            total_frames,
            sink_failure_policy,
        }
    }

    /// Renders frames `0..total_frames` one after another, handing each
    /// finished buffer to `sink` before the next frame starts. Rows of a
    /// frame are rendered on `pool`.
    pub fn run<Alg, CMap, S>(
        &self,
        algorithm: &Alg,
        colour_map: &CMap,
        pool: &ThreadPool,
        sink: &S,
    ) -> Result<ZoomSummary, ZoomSequenceError>
    where
        Alg: EscapeTimeAlgorithm + ?Sized,
        CMap: ColourMap<Real> + ?Sized,
        S: FrameSink + ?Sized,
    {
        let run_start = Instant::now();
        let mut summary = ZoomSummary::default();

        for frame_index in 0..self.total_frames {
            let viewport = self
                .schedule
                .viewport(frame_index, self.canvas)
                .map_err(|source| ZoomSequenceError::Viewport {
                    frame_index,
                    source,
                })?;

            log::debug!(
                "frame {:04}: center ({}, {}), plane width {:e}",
                frame_index,
                viewport.center().real,
                viewport.center().imag,
                viewport.width()
            );

            let frame_start = Instant::now();
            let frame = pool
                .install(|| rasterize_frame(viewport, self.canvas, algorithm, colour_map))
                .map_err(|source| ZoomSequenceError::FrameBuffer {
                    frame_index,
                    source,
                })?;

            log::info!(
                "frame {:04}/{:04} rendered in {:?}",
                frame_index + 1,
                self.total_frames,
                frame_start.elapsed()
            );

            match sink.write_frame(&frame, frame_index) {
                Ok(()) => summary.frames_written += 1,
                Err(source) => match self.sink_failure_policy {
                    SinkFailurePolicy::Abort => {
                        return Err(ZoomSequenceError::Sink {
                            frame_index,
                            source,
                        });
                    }
                    SinkFailurePolicy::SkipFrame => {
                        log::error!("frame {:04} skipped: {}", frame_index, source);
                        summary.skipped_frames.push(frame_index);
                    }
                },
            }
        }

        summary.elapsed = run_start.elapsed();

        Ok(summary)
    }
}
