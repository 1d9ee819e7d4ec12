use crate::core::data::canvas::Canvas;
use crate::core::data::complex::{Complex, Real};
use crate::core::data::viewport::Viewport;

/// Linear map from (sub-)pixel positions on a canvas to points in a viewport.
///
/// Pixel `(0, 0)` with zero offset lands on the viewport's `x_start`/`y_start`
/// corner; one whole pixel step advances by `x_unit` (or `y_unit`), so the
/// far edge of the canvas sits at `x_start + width`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelToComplex {
    x_start: Real,
    y_start: Real,
    x_unit: Real,
    y_unit: Real,
}

impl PixelToComplex {
    #[must_use]
    pub fn new(viewport: Viewport, canvas: Canvas) -> Self {
        Self {
            x_start: viewport.x_start(),
            y_start: viewport.y_start(),
            x_unit: viewport.width() / Real::from(canvas.width()),
            y_unit: viewport.height() / Real::from(canvas.height()),
        }
    }

    /// Maps pixel `(x, y)` shifted by a fractional `(dx, dy)` offset within the cell.
    #[inline]
    #[must_use]
    pub fn map(&self, x: u32, y: u32, dx: Real, dy: Real) -> Complex {
        Complex {
            real: self.x_start + (Real::from(x) + dx) * self.x_unit,
            imag: self.y_start + (Real::from(y) + dy) * self.y_unit,
        }
    }
}
