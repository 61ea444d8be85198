//! Layer tier and field configuration.
//!
//! The field is drawn from three fixed depth tiers; nearer tiers are denser,
//! faster, larger, and brighter, which is what produces the parallax depth
//! illusion when they are painted far to near.

use crate::color::Srgb;
use crate::error::FieldError;
use crate::params::{param_bool, param_f64, param_string};
use serde::Serialize;
use serde_json::Value;

/// Default background fill, a dark blue-black tone.
const DEFAULT_BACKGROUND: &str = "#0b0f17";
/// Default twinkle phase increment per reference frame.
const DEFAULT_TWINKLE_STEP: f64 = 0.02;

/// Configuration for one depth tier of particles.
///
/// `density` is expected particles per unit of viewport area, `speed` the
/// base drift magnitude per reference frame, `size_min`/`size_max` the
/// radius range, and `alpha` the tier's base opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayerConfig {
    pub density: f64,
    pub speed: f64,
    pub size_min: f64,
    pub size_max: f64,
    pub alpha: f64,
}

impl LayerConfig {
    /// Farthest tier: sparse, slow, small, dim.
    pub const FAR: LayerConfig = LayerConfig {
        density: 0.00005,
        speed: 0.04,
        size_min: 0.5,
        size_max: 0.9,
        alpha: 0.55,
    };

    /// Middle tier.
    pub const MID: LayerConfig = LayerConfig {
        density: 0.00007,
        speed: 0.07,
        size_min: 0.6,
        size_max: 1.1,
        alpha: 0.7,
    };

    /// Nearest tier: dense, fast, large, bright. Painted last (on top).
    pub const NEAR: LayerConfig = LayerConfig {
        density: 0.00008,
        speed: 0.10,
        size_min: 0.8,
        size_max: 1.4,
        alpha: 0.85,
    };
}

/// Full field configuration: ordered tiers plus paint and twinkle settings.
///
/// Tiers are ordered far to near so the paint pass draws nearer particles
/// on top.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    pub layers: Vec<LayerConfig>,
    pub background: Srgb,
    pub fill: Srgb,
    pub twinkle: bool,
    pub twinkle_step: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            layers: vec![LayerConfig::FAR, LayerConfig::MID, LayerConfig::NEAR],
            background: Srgb {
                r: 11.0 / 255.0,
                g: 15.0 / 255.0,
                b: 23.0 / 255.0,
            },
            fill: Srgb::WHITE,
            twinkle: true,
            twinkle_step: DEFAULT_TWINKLE_STEP,
        }
    }
}

impl FieldConfig {
    /// Builds a configuration from a JSON object, falling back to defaults.
    ///
    /// Recognized keys: `background` (hex string), `twinkle` (bool),
    /// `twinkle_step` (number). The tier table itself is fixed.
    ///
    /// Returns `FieldError::InvalidColor` if the background override is not
    /// a valid hex color.
    pub fn from_json(params: &Value) -> Result<Self, FieldError> {
        let defaults = Self::default();
        let background = Srgb::from_hex(&param_string(params, "background", DEFAULT_BACKGROUND))?;
        Ok(Self {
            background,
            twinkle: param_bool(params, "twinkle", defaults.twinkle),
            twinkle_step: param_f64(params, "twinkle_step", defaults.twinkle_step),
            ..defaults
        })
    }
}
