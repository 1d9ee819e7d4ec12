mod controllers;
mod core;
mod presenters;

pub use crate::controllers::zoom::zoom_config::{
    DEFAULT_BASE_WIDTH, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_CENTER,
    DEFAULT_INITIAL_SCALE, DEFAULT_MAX_ITERATIONS, DEFAULT_TOTAL_FRAMES, DEFAULT_ZOOM_FACTOR,
    ZoomConfig, ZoomConfigError,
};
pub use crate::controllers::zoom::zoom_controller::{ZoomController, ZoomControllerError};

pub use crate::core::actions::rasterize_frame::ports::colour_map::ColourMap;
pub use crate::core::actions::rasterize_frame::ports::escape_time::EscapeTimeAlgorithm;
pub use crate::core::actions::rasterize_frame::rasterize_frame::{rasterize_frame, rasterize_frame_serial};
pub use crate::core::actions::rasterize_frame::supersample::{SUBSAMPLE_OFFSETS, average_colours};
pub use crate::core::actions::zoom_sequence::ports::frame_sink::{FrameSink, FrameSinkError};
pub use crate::core::actions::zoom_sequence::run_zoom_sequence::{
    SinkFailurePolicy, ZoomSequence, ZoomSequenceError, ZoomSummary,
};
pub use crate::core::actions::zoom_sequence::zoom_schedule::ZoomSchedule;
pub use crate::core::data::canvas::{Canvas, CanvasError};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::{Complex, Real};
pub use crate::core::data::frame_buffer::{BYTES_PER_PIXEL, FrameBuffer, FrameBufferError};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, smooth_iteration_count};
pub use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKind;
pub use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::util::hsv_to_rgb::hsv_to_rgb;
pub use crate::core::util::worker_pool::{build_worker_pool, default_worker_threads};

pub use crate::presenters::file::frame_path::FramePath;
pub use crate::presenters::file::png::PngFramePresenter;
pub use crate::presenters::file::ppm::PpmFramePresenter;
