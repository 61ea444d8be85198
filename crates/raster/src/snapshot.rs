//! PNG writing for a rendered frame.
//!
//! Feature-gated behind `png` (default on) so wasm builds can depend on the
//! rasterizer without pulling in the `image` crate.

use crate::pixel::PixelSurface;
use starfield_core::FieldError;
use std::path::Path;

/// Writes the surface's current frame as a PNG image.
///
/// Returns `FieldError::Io` if the surface is empty (zero backing area) or
/// the file cannot be written.
pub fn write_png(surface: &PixelSurface, path: &Path) -> Result<(), FieldError> {
    let (w, h) = (surface.width(), surface.height());
    if w == 0 || h == 0 {
        return Err(FieldError::Io("refusing to write an empty frame".into()));
    }
    let img = image::RgbaImage::from_raw(w, h, surface.pixels().to_vec())
        .ok_or_else(|| FieldError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| FieldError::Io(e.to_string()))
}
