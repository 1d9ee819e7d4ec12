use image::{ExtendedColorType, ImageError, ImageFormat};

use crate::core::actions::zoom_sequence::ports::frame_sink::{FrameSink, FrameSinkError};
use crate::core::data::frame_buffer::FrameBuffer;
use crate::presenters::file::frame_path::FramePath;

/// Lossless PNG frame writer. The output directory must already exist.
#[derive(Debug, Clone, Default)]
pub struct PngFramePresenter {
    path: FramePath,
}

impl PngFramePresenter {
    pub fn new(path: FramePath) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn frame_path(&self) -> &FramePath {
        &self.path
    }
}

impl FrameSink for PngFramePresenter {
    fn write_frame(&self, frame: &FrameBuffer, frame_index: u32) -> Result<(), FrameSinkError> {
        let path = self.path.for_frame(frame_index, "png");

        let result = image::save_buffer_with_format(
            &path,
            frame.buffer(),
            frame.width(),
            frame.height(),
            ExtendedColorType::Rgb8,
            ImageFormat::Png,
        );

        match result {
            Ok(()) => {
                log::debug!("Saved to {}", path.display());
                Ok(())
            }
            Err(ImageError::IoError(source)) => Err(FrameSinkError::Io { path, source }),
            Err(err) => Err(FrameSinkError::Encode {
                path,
                source: Box::new(err),
            }),
        }
    }
}
