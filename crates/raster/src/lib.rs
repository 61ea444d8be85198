#![deny(unsafe_code)]
//! CPU-side rendering of the particle field.
//!
//! [`PixelSurface`] implements the core `Surface` trait over an RGBA8
//! buffer at backing resolution, so headless builds (the CLI, tests) can
//! render frames without any platform drawing API. The PNG snapshot path is
//! feature-gated behind `png` (default on) so downstream crates can depend
//! on the rasterizer without pulling in the `image` crate.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use pixel::PixelSurface;
