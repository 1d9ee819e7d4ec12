use crate::core::data::frame_buffer::FrameBuffer;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum FrameSinkError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Encode {
        path: PathBuf,
        source: Box<dyn Error + Send + Sync>,
    },
}

impl fmt::Display for FrameSinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "could not write {}: {}", path.display(), source)
            }
            Self::Encode { path, source } => {
                write!(f, "could not encode {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for FrameSinkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Encode { source, .. } => Some(source.as_ref()),
        }
    }
}

/// Destination for finished frames. Receives every frame exactly once, in
/// increasing index order, after all of its pixels are computed.
pub trait FrameSink {
    fn write_frame(&self, frame: &FrameBuffer, frame_index: u32) -> Result<(), FrameSinkError>;
}

impl<S: FrameSink + ?Sized> FrameSink for &S {
    fn write_frame(&self, frame: &FrameBuffer, frame_index: u32) -> Result<(), FrameSinkError> {
        (**self).write_frame(frame, frame_index)
    }
}
