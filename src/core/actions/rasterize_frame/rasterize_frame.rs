use rayon::prelude::*;

use crate::core::actions::rasterize_frame::ports::colour_map::ColourMap;
use crate::core::actions::rasterize_frame::ports::escape_time::EscapeTimeAlgorithm;
use crate::core::actions::rasterize_frame::supersample::supersample_pixel;
use crate::core::data::canvas::Canvas;
use crate::core::data::complex::Real;
use crate::core::data::frame_buffer::{BYTES_PER_PIXEL, FrameBuffer, FrameBufferError, write_colour};
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::PixelToComplex;

/// Renders one frame with rows distributed across the current rayon pool.
///
/// Each row is a disjoint `par_chunks_mut` slice of the buffer, so workers
/// never share an output slot. Call inside `ThreadPool::install` to pin the
/// work to a specific pool.
pub fn rasterize_frame<Alg, CMap>(
    viewport: Viewport,
    canvas: Canvas,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<FrameBuffer, FrameBufferError>
where
    Alg: EscapeTimeAlgorithm + ?Sized,
    CMap: ColourMap<Real> + ?Sized,
{
    let mapping = PixelToComplex::new(viewport, canvas);
    let mut frame = FrameBuffer::try_new(canvas)?;
    let row_stride = frame.row_stride();

    frame
        .buffer_mut()
        .par_chunks_mut(row_stride)
        .enumerate()
        .for_each(|(y, row)| render_row(row, y as u32, &mapping, algorithm, colour_map));

    Ok(frame)
}

/// Single-threaded rasterization, byte-identical to [`rasterize_frame`].
pub fn rasterize_frame_serial<Alg, CMap>(
    viewport: Viewport,
    canvas: Canvas,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<FrameBuffer, FrameBufferError>
where
    Alg: EscapeTimeAlgorithm + ?Sized,
    CMap: ColourMap<Real> + ?Sized,
{
    let mapping = PixelToComplex::new(viewport, canvas);
    let mut frame = FrameBuffer::try_new(canvas)?;
    let row_stride = frame.row_stride();

    frame
        .buffer_mut()
        .chunks_mut(row_stride)
        .enumerate()
        .for_each(|(y, row)| render_row(row, y as u32, &mapping, algorithm, colour_map));

    Ok(frame)
}

fn render_row<Alg, CMap>(
    row: &mut [u8],
    y: u32,
    mapping: &PixelToComplex,
    algorithm: &Alg,
    colour_map: &CMap,
) where
    Alg: EscapeTimeAlgorithm + ?Sized,
    CMap: ColourMap<Real> + ?Sized,
{
    for (x, slot) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let colour = supersample_pixel(x as u32, y, mapping, algorithm, colour_map);
        write_colour(slot, colour);
    }
}
