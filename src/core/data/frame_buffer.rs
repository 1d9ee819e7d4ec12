use crate::core::data::canvas::Canvas;
use crate::core::data::colour::Colour;
use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn canvas_to_buffer_size(canvas: Canvas) -> Result<usize, FrameBufferError> {
    (canvas.width() as usize)
        .checked_mul(canvas.height() as usize)
        .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
        .ok_or(FrameBufferError::TooLarge { canvas })
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameBufferError {
    Allocation {
        bytes: usize,
        source: TryReserveError,
    },
    TooLarge {
        canvas: Canvas,
    },
    PixelOutsideBounds {
        x: u32,
        y: u32,
        canvas: Canvas,
    },
    BoundsMismatch {
        canvas_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation { bytes, .. } => {
                write!(f, "could not allocate {} bytes for frame buffer", bytes)
            }
            Self::TooLarge { canvas } => {
                write!(
                    f,
                    "{}x{} canvas does not fit in addressable memory",
                    canvas.width(),
                    canvas.height()
                )
            }
            Self::PixelOutsideBounds { x, y, canvas } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} canvas",
                    x,
                    y,
                    canvas.width(),
                    canvas.height()
                )
            }
            Self::BoundsMismatch {
                canvas_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "canvas size {} does not match buffer size {}",
                    canvas_size, buffer_size
                )
            }
        }
    }
}

impl Error for FrameBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Allocation { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Row-major RGB bytes for one frame, three interleaved channels per pixel
/// and no row padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    canvas: Canvas,
    buffer: Vec<u8>,
}

impl FrameBuffer {
    /// Allocates a zeroed buffer, reporting allocation failure instead of
    /// aborting the process.
    pub fn try_new(canvas: Canvas) -> Result<Self, FrameBufferError> {
        let bytes = canvas_to_buffer_size(canvas)?;
        let mut buffer = Vec::new();

        buffer
            .try_reserve_exact(bytes)
            .map_err(|source| FrameBufferError::Allocation { bytes, source })?;
        buffer.resize(bytes, 0);

        Ok(Self { canvas, buffer })
    }

    pub fn from_data(canvas: Canvas, buffer: Vec<u8>) -> Result<Self, FrameBufferError> {
        let canvas_size = canvas_to_buffer_size(canvas)?;

        if canvas_size != buffer.len() {
            return Err(FrameBufferError::BoundsMismatch {
                canvas_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { canvas, buffer })
    }

    #[must_use]
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.canvas.width() as usize * BYTES_PER_PIXEL
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.buffer
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if !self.canvas.contains(x, y) {
            return None;
        }

        let index = self.index_of(x, y);

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), FrameBufferError> {
        if !self.canvas.contains(x, y) {
            return Err(FrameBufferError::PixelOutsideBounds {
                x,
                y,
                canvas: self.canvas,
            });
        }

        let index = self.index_of(x, y);
        write_colour(&mut self.buffer[index..index + BYTES_PER_PIXEL], colour);

        Ok(())
    }

    pub fn pixels(&self) -> impl Iterator<Item = Colour> + '_ {
        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|rgb| Colour {
                r: rgb[0],
                g: rgb[1],
                b: rgb[2],
            })
    }

    fn index_of(&self, x: u32, y: u32) -> usize {
        y as usize * self.row_stride() + x as usize * BYTES_PER_PIXEL
    }
}

/// Writes one pixel into a three-byte slot.
pub(crate) fn write_colour(slot: &mut [u8], colour: Colour) {
    slot[0] = colour.r;
    slot[1] = colour.g;
    slot[2] = colour.b;
}
