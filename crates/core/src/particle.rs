//! A single drifting point: position, constant velocity, fixed radius and
//! base opacity, and a twinkle phase.
//!
//! Radius and base alpha are immutable after creation; only position and
//! phase mutate per frame.

use crate::config::LayerConfig;
use crate::prng::Xorshift64;
use glam::DVec2;

/// Margin beyond the viewport edge before a particle wraps to the far side,
/// in logical units. Keeps the wrap from popping exactly at the edge.
pub const EDGE_MARGIN: f64 = 2.0;

/// Speed jitter: magnitude is uniform in [0.8, 1.4) times the tier speed.
const SPEED_JITTER_BASE: f64 = 0.8;
const SPEED_JITTER_SPAN: f64 = 0.6;

/// Alpha jitter: base alpha is uniform in [0.85, 1.15) times the tier alpha.
const ALPHA_JITTER_BASE: f64 = 0.85;
const ALPHA_JITTER_SPAN: f64 = 0.3;

/// Twinkle oscillation: instantaneous alpha is
/// `base * (TWINKLE_FLOOR + TWINKLE_DEPTH * sin(phase))`.
const TWINKLE_FLOOR: f64 = 0.85;
const TWINKLE_DEPTH: f64 = 0.15;

/// One drawable point of the field.
#[derive(Debug, Clone)]
pub struct Particle {
    pos: DVec2,
    vel: DVec2,
    radius: f64,
    base_alpha: f64,
    phase: f64,
}

impl Particle {
    /// Draws a fresh particle for the given tier within a W x H viewport.
    ///
    /// Draw order from the PRNG: direction angle, speed magnitude, x, y,
    /// radius, base alpha, initial phase.
    pub(crate) fn spawn(
        config: &LayerConfig,
        width: f64,
        height: f64,
        rng: &mut Xorshift64,
    ) -> Self {
        let angle = rng.next_angle();
        let speed = config.speed * (SPEED_JITTER_BASE + rng.next_f64() * SPEED_JITTER_SPAN);
        Self {
            pos: DVec2::new(rng.next_f64() * width, rng.next_f64() * height),
            vel: DVec2::from_angle(angle) * speed,
            radius: rng.next_range(config.size_min, config.size_max),
            base_alpha: config.alpha * (ALPHA_JITTER_BASE + rng.next_f64() * ALPHA_JITTER_SPAN),
            phase: rng.next_angle(),
        }
    }

    pub fn x(&self) -> f64 {
        self.pos.x
    }

    pub fn y(&self) -> f64 {
        self.pos.y
    }

    pub fn position(&self) -> DVec2 {
        self.pos
    }

    pub fn velocity(&self) -> DVec2 {
        self.vel
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn base_alpha(&self) -> f64 {
        self.base_alpha
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Advances the particle by one frame.
    ///
    /// `scale` is the frame-rate normalization factor (1.0 at the reference
    /// cadence), `phase_step` the twinkle increment per reference frame
    /// (0 when twinkle is off). Positions drifting past the viewport edge
    /// wrap to the opposite side with an [`EDGE_MARGIN`] overshoot.
    pub(crate) fn advance(&mut self, scale: f64, width: f64, height: f64, phase_step: f64) {
        self.pos += self.vel * scale;

        if self.pos.x < -EDGE_MARGIN {
            self.pos.x = width + EDGE_MARGIN;
        }
        if self.pos.x > width + EDGE_MARGIN {
            self.pos.x = -EDGE_MARGIN;
        }
        if self.pos.y < -EDGE_MARGIN {
            self.pos.y = height + EDGE_MARGIN;
        }
        if self.pos.y > height + EDGE_MARGIN {
            self.pos.y = -EDGE_MARGIN;
        }

        self.phase += phase_step * scale;
    }

    /// Multiplies the position by per-axis factors. Velocity is untouched:
    /// drift speed stays in pre-resize units.
    pub(crate) fn rescale(&mut self, sx: f64, sy: f64) {
        self.pos.x *= sx;
        self.pos.y *= sy;
    }

    /// Instantaneous paint alpha.
    ///
    /// With twinkle on this oscillates smoothly over
    /// [0.7 * base_alpha, 1.0 * base_alpha]; with twinkle off it is the
    /// base alpha unchanged.
    pub fn alpha(&self, twinkle: bool) -> f64 {
        if twinkle {
            self.base_alpha * (TWINKLE_FLOOR + TWINKLE_DEPTH * self.phase.sin())
        } else {
            self.base_alpha
        }
    }
}
