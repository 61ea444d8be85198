//! RGBA8 pixel-buffer implementation of the core `Surface` trait.
//!
//! The buffer lives at backing resolution; logical coordinates are scaled by
//! the viewport's pixel ratio at paint time, mirroring the transform a
//! canvas surface applies. Circle edges get one pixel of distance-based
//! coverage so sub-pixel radii still read as round points.

use starfield_core::{Srgb, Surface, Viewport};

/// A CPU surface: one RGBA8 buffer sized to the viewport's backing
/// resolution.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    viewport: Viewport,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelSurface {
    /// Allocates a buffer for the given viewport.
    pub fn new(viewport: Viewport) -> Self {
        let width = viewport.backing_width();
        let height = viewport.backing_height();
        Self {
            viewport,
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Backing-store width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Backing-store height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Read-only access to the RGBA8 buffer, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    fn blend(&mut self, px: usize, py: usize, src: [u8; 3], coverage: f64) {
        let idx = (py * self.width as usize + px) * 4;
        for (offset, &channel) in src.iter().enumerate() {
            let dst = self.pixels[idx + offset] as f64;
            let out = channel as f64 * coverage + dst * (1.0 - coverage);
            self.pixels[idx + offset] = out.round() as u8;
        }
        self.pixels[idx + 3] = 255;
    }
}

impl Default for PixelSurface {
    fn default() -> Self {
        Self::new(Viewport::new(0.0, 0.0, 1.0))
    }
}

impl Surface for PixelSurface {
    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.width = viewport.backing_width();
        self.height = viewport.backing_height();
        self.pixels = vec![0; self.width as usize * self.height as usize * 4];
    }

    fn clear(&mut self, color: Srgb) {
        let [r, g, b] = color.to_bytes();
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[r, g, b, 255]);
        }
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Srgb, alpha: f64) {
        let scale = self.viewport.pixel_ratio();
        let cx = x * scale;
        let cy = y * scale;
        let r = radius * scale;
        if !cx.is_finite() || !cy.is_finite() || !(r > 0.0) {
            return;
        }
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha == 0.0 {
            return;
        }

        let min_x = ((cx - r - 0.5).floor() as i64).max(0);
        let max_x = ((cx + r + 0.5).ceil() as i64).min(self.width as i64 - 1);
        let min_y = ((cy - r - 0.5).floor() as i64).max(0);
        let max_y = ((cy + r + 0.5).ceil() as i64).min(self.height as i64 - 1);
        if min_x > max_x || min_y > max_y {
            return;
        }

        let src = color.to_bytes();
        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let dx = (px as f64 + 0.5) - cx;
                let dy = (py as f64 + 0.5) - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                let coverage = (r + 0.5 - dist).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend(px as usize, py as usize, src, coverage * alpha);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(surface: &PixelSurface, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * surface.width() as usize + x as usize) * 4;
        surface.pixels()[idx..idx + 4].try_into().unwrap()
    }

    fn unit_surface(w: f64, h: f64) -> PixelSurface {
        PixelSurface::new(Viewport::new(w, h, 1.0))
    }

    #[test]
    fn buffer_length_matches_backing_resolution() {
        let surface = PixelSurface::new(Viewport::new(8.0, 4.0, 2.0));
        assert_eq!(surface.width(), 16);
        assert_eq!(surface.height(), 8);
        assert_eq!(surface.pixels().len(), 16 * 8 * 4);
    }

    #[test]
    fn set_viewport_reallocates_the_buffer() {
        let mut surface = PixelSurface::default();
        assert_eq!(surface.pixels().len(), 0);
        surface.set_viewport(Viewport::new(10.0, 10.0, 1.0));
        assert_eq!(surface.pixels().len(), 400);
    }

    #[test]
    fn clear_fills_every_pixel_opaquely() {
        let mut surface = unit_surface(4.0, 4.0);
        surface.clear(Srgb::from_hex("#0b0f17").unwrap());
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(pixel(&surface, x, y), [11, 15, 23, 255]);
            }
        }
    }

    #[test]
    fn opaque_circle_covers_its_center_pixel() {
        let mut surface = unit_surface(9.0, 9.0);
        surface.clear(Srgb { r: 0.0, g: 0.0, b: 0.0 });
        surface.fill_circle(4.5, 4.5, 1.5, Srgb::WHITE, 1.0);
        assert_eq!(pixel(&surface, 4, 4), [255, 255, 255, 255]);
        // A far corner stays background.
        assert_eq!(pixel(&surface, 0, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn half_alpha_blends_toward_the_fill() {
        let mut surface = unit_surface(9.0, 9.0);
        surface.clear(Srgb { r: 0.0, g: 0.0, b: 0.0 });
        surface.fill_circle(4.5, 4.5, 1.5, Srgb::WHITE, 0.5);
        let [r, g, b, a] = pixel(&surface, 4, 4);
        assert_eq!(a, 255);
        for channel in [r, g, b] {
            assert!((126..=129).contains(&channel), "channel = {channel}");
        }
    }

    #[test]
    fn zero_alpha_paints_nothing() {
        let mut surface = unit_surface(9.0, 9.0);
        surface.clear(Srgb { r: 0.0, g: 0.0, b: 0.0 });
        let before = surface.pixels().to_vec();
        surface.fill_circle(4.5, 4.5, 1.5, Srgb::WHITE, 0.0);
        assert_eq!(surface.pixels(), &before[..]);
    }

    #[test]
    fn pixel_ratio_scales_circle_placement() {
        let mut surface = PixelSurface::new(Viewport::new(10.0, 10.0, 2.0));
        surface.clear(Srgb { r: 0.0, g: 0.0, b: 0.0 });
        surface.fill_circle(5.0, 5.0, 1.0, Srgb::WHITE, 1.0);
        // Logical (5, 5) lands at backing (10, 10).
        assert_eq!(pixel(&surface, 10, 10), [255, 255, 255, 255]);
        assert_eq!(pixel(&surface, 5, 5), [0, 0, 0, 255]);
    }

    #[test]
    fn circle_outside_the_buffer_is_ignored() {
        let mut surface = unit_surface(8.0, 8.0);
        surface.clear(Srgb { r: 0.0, g: 0.0, b: 0.0 });
        let before = surface.pixels().to_vec();
        surface.fill_circle(-50.0, -50.0, 2.0, Srgb::WHITE, 1.0);
        surface.fill_circle(500.0, 4.0, 2.0, Srgb::WHITE, 1.0);
        assert_eq!(surface.pixels(), &before[..]);
    }

    #[test]
    fn circle_straddling_the_edge_clips_without_panicking() {
        let mut surface = unit_surface(8.0, 8.0);
        surface.clear(Srgb { r: 0.0, g: 0.0, b: 0.0 });
        surface.fill_circle(0.0, 0.0, 2.0, Srgb::WHITE, 1.0);
        let [r, ..] = pixel(&surface, 0, 0);
        assert!(r > 0);
    }

    #[test]
    fn non_positive_radius_paints_nothing() {
        let mut surface = unit_surface(8.0, 8.0);
        surface.clear(Srgb { r: 0.0, g: 0.0, b: 0.0 });
        let before = surface.pixels().to_vec();
        surface.fill_circle(4.0, 4.0, 0.0, Srgb::WHITE, 1.0);
        surface.fill_circle(4.0, 4.0, -1.0, Srgb::WHITE, 1.0);
        assert_eq!(surface.pixels(), &before[..]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn buffer_length_always_backing_area_times_four(
                w in 0.0_f64..200.0,
                h in 0.0_f64..200.0,
                ratio in 0.1_f64..4.0,
            ) {
                let surface = PixelSurface::new(Viewport::new(w, h, ratio));
                prop_assert_eq!(
                    surface.pixels().len(),
                    surface.width() as usize * surface.height() as usize * 4
                );
            }

            #[test]
            fn arbitrary_circles_never_panic(
                x in -1000.0_f64..1000.0,
                y in -1000.0_f64..1000.0,
                radius in -5.0_f64..50.0,
                alpha in -1.0_f64..2.0,
            ) {
                let mut surface = unit_surface(32.0, 32.0);
                surface.clear(Srgb { r: 0.0, g: 0.0, b: 0.0 });
                surface.fill_circle(x, y, radius, Srgb::WHITE, alpha);
            }
        }
    }
}
