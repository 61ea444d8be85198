//! Activation-scoped owner of everything one mounted field touches per
//! frame: the field, the clock, the surface, and the current viewport.
//!
//! The host scheduler calls [`step`](Animator::step) once per display
//! refresh with a timestamp and [`resize`](Animator::resize) on viewport
//! changes. [`stop`](Animator::stop) is the teardown: afterwards neither
//! call mutates state or touches the surface.

use crate::clock::FrameClock;
use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::surface::Surface;
use crate::viewport::Viewport;

/// Drives a [`ParticleField`] against a [`Surface`] under host scheduling.
#[derive(Debug)]
pub struct Animator<S: Surface> {
    field: ParticleField,
    clock: FrameClock,
    surface: S,
    viewport: Viewport,
    stopped: bool,
}

impl<S: Surface> Animator<S> {
    /// Builds the field sized to the initial viewport and sizes the surface
    /// backing store to match.
    pub fn new(
        config: FieldConfig,
        width: f64,
        height: f64,
        device_pixel_ratio: f64,
        seed: u64,
        mut surface: S,
    ) -> Self {
        let viewport = Viewport::new(width, height, device_pixel_ratio);
        surface.set_viewport(viewport);
        Self {
            field: ParticleField::new(config, width, height, seed),
            clock: FrameClock::new(),
            surface,
            viewport,
            stopped: false,
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Consumes the animator and returns the surface, e.g. to read back the
    /// final frame.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Adapts to a viewport change: re-sizes the surface backing store and
    /// rescales (or regenerates) the field. No-op after [`stop`](Self::stop).
    pub fn resize(&mut self, width: f64, height: f64, device_pixel_ratio: f64) {
        if self.stopped {
            return;
        }
        self.viewport = Viewport::new(width, height, device_pixel_ratio);
        self.surface.set_viewport(self.viewport);
        self.field.resize(width, height);
    }

    /// Runs one frame at the given timestamp: normalize elapsed time,
    /// advance every particle, repaint. No-op after [`stop`](Self::stop).
    pub fn step(&mut self, now_ms: f64) {
        if self.stopped {
            return;
        }
        let tick = self.clock.tick(now_ms);
        self.field.advance(tick.scale());
        self.field.paint(&mut self.surface);
    }

    /// Tears the animation down. Every later `step` or `resize` returns
    /// without touching the field or the surface.
    pub fn stop(&mut self) {
        self.stopped = true;
    }
}
