use crate::core::data::canvas::Canvas;
use crate::core::data::complex::{Complex, Real};
use crate::core::data::viewport::{Viewport, ViewportError};

/// Exponential zoom towards a fixed point: frame `f` shows a plane width of
/// `base_width * initial_scale * zoom_factor^f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSchedule {
    center: Complex,
    base_width: Real,
    initial_scale: Real,
    zoom_factor: Real,
}

impl ZoomSchedule {
    #[must_use]
    pub fn new(center: Complex, base_width: Real, initial_scale: Real, zoom_factor: Real) -> Self {
        Self {
            center,
            base_width,
            initial_scale,
            zoom_factor,
        }
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn scale(&self, frame_index: u32) -> Real {
        self.initial_scale * self.zoom_factor.powf(Real::from(frame_index))
    }

    pub fn viewport(&self, frame_index: u32, canvas: Canvas) -> Result<Viewport, ViewportError> {
        let width = self.base_width * self.scale(frame_index);
        let height = width * canvas.aspect_ratio();

        Viewport::new(self.center, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEAHORSE_VALLEY: Complex = Complex {
        real: -0.743643887037151,
        imag: 0.131825904205330,
    };

    fn schedule(initial_scale: Real, zoom_factor: Real) -> ZoomSchedule {
        ZoomSchedule::new(SEAHORSE_VALLEY, 3.5, initial_scale, zoom_factor)
    }

    #[test]
    fn test_frame_zero_uses_initial_scale_exactly() {
        let canvas = Canvas::new(1920, 1080).unwrap();

        assert_eq!(schedule(1.0, 0.96).viewport(0, canvas).unwrap().width(), 3.5);
        assert_eq!(schedule(0.25, 0.5).viewport(0, canvas).unwrap().width(), 0.25 * 3.5);
    }

    #[test]
    fn test_scale_decays_exponentially() {
        let s = schedule(2.0, 0.5);

        assert_eq!(s.scale(0), 2.0);
        assert_eq!(s.scale(1), 1.0);
        assert_eq!(s.scale(3), 0.25);
    }

    #[test]
    fn test_width_strictly_decreases_for_shrinking_factor() {
        let s = schedule(1.0, 0.96);
        let canvas = Canvas::new(1920, 1080).unwrap();
        let widths: Vec<Real> = (0..500)
            .map(|f| s.viewport(f, canvas).unwrap().width())
            .collect();

        assert!(widths.windows(2).all(|pair| pair[1] < pair[0]));
    }

    #[test]
    fn test_viewport_keeps_canvas_aspect_ratio() {
        let viewport = schedule(1.0, 0.96)
            .viewport(0, Canvas::new(1920, 1080).unwrap())
            .unwrap();

        assert_eq!(viewport.height(), 3.5 * 0.5625);
    }

    #[test]
    fn test_viewport_is_centred_on_point_of_interest() {
        let viewport = schedule(1.0, 0.96)
            .viewport(42, Canvas::new(64, 48).unwrap())
            .unwrap();

        assert_eq!(viewport.center(), SEAHORSE_VALLEY);
    }

    #[test]
    fn test_underflowed_scale_is_an_invalid_viewport() {
        let result = schedule(1.0, 1e-10).viewport(100, Canvas::new(4, 4).unwrap());

        assert!(matches!(result, Err(ViewportError::InvalidSize { .. })));
    }
}
