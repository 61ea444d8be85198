//! The painting seam between the simulation and a concrete drawing target.

use crate::color::Srgb;
use crate::viewport::Viewport;

/// A drawing target the field paints into once per frame.
///
/// Implementations exist for a CPU pixel buffer and for a browser 2D canvas;
/// tests substitute recording doubles. The trait is **object-safe** so a
/// paint pass can take `&mut dyn Surface`.
///
/// Coordinates passed to [`fill_circle`](Surface::fill_circle) are logical
/// units; the surface maps them to backing pixels using the ratio carried by
/// the last [`set_viewport`](Surface::set_viewport) call.
pub trait Surface {
    /// Resizes the backing store to match the viewport and resets the
    /// drawing transform so one logical unit equals `pixel_ratio` pixels.
    fn set_viewport(&mut self, viewport: Viewport);

    /// Fills the whole visible area with `color`.
    fn clear(&mut self, color: Srgb);

    /// Paints a filled circle at logical `(x, y)` with the given radius,
    /// fill color, and opacity in [0, 1].
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Srgb, alpha: f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal implementation used to verify trait object safety.
    #[derive(Default)]
    struct CountingSurface {
        clears: usize,
        circles: usize,
    }

    impl Surface for CountingSurface {
        fn set_viewport(&mut self, _viewport: Viewport) {}

        fn clear(&mut self, _color: Srgb) {
            self.clears += 1;
        }

        fn fill_circle(&mut self, _x: f64, _y: f64, _radius: f64, _color: Srgb, _alpha: f64) {
            self.circles += 1;
        }
    }

    #[test]
    fn surface_trait_is_object_safe() {
        let mut surface = CountingSurface::default();
        {
            let dyn_ref: &mut dyn Surface = &mut surface;
            dyn_ref.clear(Srgb::WHITE);
            dyn_ref.fill_circle(1.0, 2.0, 0.5, Srgb::WHITE, 0.8);
        }
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.circles, 1);
    }

    #[test]
    fn boxed_surface_works() {
        let boxed: Box<dyn Surface> = Box::new(CountingSurface::default());
        drop(boxed);
    }
}
