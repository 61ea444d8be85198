//! One depth tier: a configuration plus its particle collection.

use crate::config::LayerConfig;
use crate::particle::Particle;
use crate::prng::Xorshift64;

/// Floor on the particle count of a layer, so small viewports still show a
/// populated field.
pub const MIN_PARTICLES: usize = 60;

/// A depth tier of particles sharing one [`LayerConfig`].
#[derive(Debug, Clone)]
pub struct Layer {
    config: LayerConfig,
    particles: Vec<Particle>,
}

impl Layer {
    /// Generates a layer for a W x H viewport.
    ///
    /// The particle count is `max(60, floor(W * H * density))`; every
    /// particle is drawn independently from `rng`.
    pub fn generate(config: LayerConfig, width: f64, height: f64, rng: &mut Xorshift64) -> Self {
        let count = Self::target_count(&config, width, height);
        let particles = (0..count)
            .map(|_| Particle::spawn(&config, width, height, rng))
            .collect();
        Self { config, particles }
    }

    /// The count the generation formula yields for a viewport:
    /// `max(MIN_PARTICLES, floor(width * height * density))`.
    pub fn target_count(config: &LayerConfig, width: f64, height: f64) -> usize {
        let scaled = (width * height * config.density).floor();
        if scaled.is_finite() && scaled > MIN_PARTICLES as f64 {
            scaled as usize
        } else {
            MIN_PARTICLES
        }
    }

    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advances every particle by one frame.
    pub(crate) fn advance(&mut self, scale: f64, width: f64, height: f64, phase_step: f64) {
        for particle in &mut self.particles {
            particle.advance(scale, width, height, phase_step);
        }
    }

    /// Rescales every particle position by per-axis factors.
    pub(crate) fn rescale(&mut self, sx: f64, sy: f64) {
        for particle in &mut self.particles {
            particle.rescale(sx, sy);
        }
    }
}
