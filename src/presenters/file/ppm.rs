use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::actions::zoom_sequence::ports::frame_sink::{FrameSink, FrameSinkError};
use crate::core::data::frame_buffer::FrameBuffer;
use crate::presenters::file::frame_path::FramePath;

/// Binary PPM (P6) frame writer. The output directory must already exist.
#[derive(Debug, Clone, Default)]
pub struct PpmFramePresenter {
    path: FramePath,
}

impl PpmFramePresenter {
    pub fn new(path: FramePath) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn frame_path(&self) -> &FramePath {
        &self.path
    }
}

fn write_ppm(frame: &FrameBuffer, filepath: &Path) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(filepath)?);

    // P6: binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", frame.width(), frame.height())?;
    writeln!(file, "255")?;
    file.write_all(frame.buffer())?;
    file.flush()
}

impl FrameSink for PpmFramePresenter {
    fn write_frame(&self, frame: &FrameBuffer, frame_index: u32) -> Result<(), FrameSinkError> {
        let path = self.path.for_frame(frame_index, "ppm");

        match write_ppm(frame, &path) {
            Ok(()) => {
                log::debug!("Saved to {}", path.display());
                Ok(())
            }
            Err(source) => Err(FrameSinkError::Io { path, source }),
        }
    }
}
