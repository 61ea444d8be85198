//! Elapsed-time normalization for the frame step.
//!
//! The host scheduler hands each step a timestamp; the clock turns the raw
//! elapsed time into a bounded motion scale so a long pause (tab in the
//! background, a dropped frame burst) cannot teleport particles.

/// Upper bound on the elapsed time fed into one step, in milliseconds.
pub const MAX_FRAME_MS: f64 = 40.0;

/// Reference frame duration (~60 steps per second). A step covering exactly
/// this much time gets a motion scale of 1.
pub const REFERENCE_FRAME_MS: f64 = 16.67;

/// Normalized timing for one frame step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    dt_ms: f64,
    scale: f64,
}

impl FrameTick {
    /// Normalizes a raw elapsed time.
    ///
    /// The elapsed time is clamped to [0, [`MAX_FRAME_MS`]]; non-finite
    /// input collapses to 0. The motion scale is `dt / 16.67`.
    pub fn from_raw(raw_ms: f64) -> Self {
        let dt_ms = if raw_ms.is_finite() {
            raw_ms.clamp(0.0, MAX_FRAME_MS)
        } else {
            0.0
        };
        Self {
            dt_ms,
            scale: dt_ms / REFERENCE_FRAME_MS,
        }
    }

    /// Clamped elapsed time in milliseconds.
    pub fn dt_ms(&self) -> f64 {
        self.dt_ms
    }

    /// Frame-rate normalization factor applied to velocities and phase steps.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

/// Tracks the previous step's timestamp and produces a [`FrameTick`] per call.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `now_ms` and returns the normalized tick since the previous
    /// call. The first call reports zero elapsed time.
    pub fn tick(&mut self, now_ms: f64) -> FrameTick {
        let raw = self.last_ms.map_or(0.0, |last| now_ms - last);
        self.last_ms = Some(now_ms);
        FrameTick::from_raw(raw)
    }
}
