//! The whole particle field: ordered depth layers, current dimensions, and
//! the owned random source.
//!
//! Layers are kept far to near and painted in that order, so nearer
//! particles draw last (on top).

use crate::config::FieldConfig;
use crate::layer::Layer;
use crate::prng::Xorshift64;
use crate::surface::Surface;

/// Every layer of the field plus the logical dimensions they were generated
/// (or last rescaled) for.
#[derive(Debug, Clone)]
pub struct ParticleField {
    config: FieldConfig,
    layers: Vec<Layer>,
    width: f64,
    height: f64,
    rng: Xorshift64,
}

impl ParticleField {
    /// Generates a field for a W x H viewport from a seed.
    ///
    /// Generation at a degenerate size (zero area) still produces the
    /// per-layer count floor; the first real [`resize`](Self::resize) then
    /// hits the regeneration path and redistributes everything.
    pub fn new(config: FieldConfig, width: f64, height: f64, seed: u64) -> Self {
        let mut rng = Xorshift64::new(seed);
        let layers = config
            .layers
            .iter()
            .map(|cfg| Layer::generate(*cfg, width, height, &mut rng))
            .collect();
        Self {
            config,
            layers,
            width,
            height,
            rng,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Layers in paint order, far to near.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Adapts the field to new logical dimensions.
    ///
    /// With finite, positive scale factors every particle position is
    /// multiplied by `(new/prev)` per axis, preserving the spatial
    /// distribution. Degenerate factors (previous dimensions zero, or a
    /// collapse to zero) discard the layers and regenerate them at the new
    /// size from the owned PRNG. Velocities are never rescaled.
    pub fn resize(&mut self, new_width: f64, new_height: f64) {
        let sx = new_width / self.width;
        let sy = new_height / self.height;

        if sx.is_finite() && sy.is_finite() && sx > 0.0 && sy > 0.0 {
            for layer in &mut self.layers {
                layer.rescale(sx, sy);
            }
        } else {
            self.layers = self
                .config
                .layers
                .iter()
                .map(|cfg| Layer::generate(*cfg, new_width, new_height, &mut self.rng))
                .collect();
        }

        self.width = new_width;
        self.height = new_height;
    }

    /// Advances every particle by one frame at the given motion scale.
    pub fn advance(&mut self, scale: f64) {
        let phase_step = if self.config.twinkle {
            self.config.twinkle_step
        } else {
            0.0
        };
        for layer in &mut self.layers {
            layer.advance(scale, self.width, self.height, phase_step);
        }
    }

    /// Paints the current frame: background fill, then every particle far
    /// to near at its instantaneous twinkle alpha.
    pub fn paint(&self, surface: &mut dyn Surface) {
        surface.clear(self.config.background);
        for layer in &self.layers {
            for particle in layer.particles() {
                surface.fill_circle(
                    particle.x(),
                    particle.y(),
                    particle.radius(),
                    self.config.fill,
                    particle.alpha(self.config.twinkle),
                );
            }
        }
    }
}
