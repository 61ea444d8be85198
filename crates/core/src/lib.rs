#![deny(unsafe_code)]
//! Core types and logic for the starfield particle field.
//!
//! Provides the [`ParticleField`] simulation (depth-tiered [`Layer`]s of
//! drifting [`Particle`]s), the [`Surface`] painting trait, the
//! [`FrameClock`] elapsed-time normalizer, the [`Viewport`] backing-store
//! model, the [`Xorshift64`] PRNG, and the [`Animator`] that ties them to
//! a host frame scheduler.

pub mod animator;
pub mod clock;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod layer;
pub mod params;
pub mod particle;
pub mod prng;
pub mod surface;
pub mod viewport;

pub use animator::Animator;
pub use clock::{FrameClock, FrameTick};
pub use color::Srgb;
pub use config::{FieldConfig, LayerConfig};
pub use error::FieldError;
pub use field::ParticleField;
pub use layer::Layer;
pub use particle::Particle;
pub use prng::Xorshift64;
pub use surface::Surface;
pub use viewport::Viewport;
