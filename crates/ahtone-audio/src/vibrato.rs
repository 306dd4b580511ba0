//! Vibrato: sinusoidal pitch modulation shared by every harmonic.
//!
//! The factor returned here multiplies the phase argument `2π·f·t` of each
//! partial, so all harmonics wobble together.

use std::f64::consts::TAU;

use crate::params::VibratoParams;

/// Sinusoidal vibrato generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vibrato {
    /// Modulation rate in Hz.
    rate: f64,
    /// Modulation depth.
    depth: f64,
}

impl Vibrato {
    /// Creates a new vibrato.
    ///
    /// # Arguments
    /// * `rate` - Modulation rate in Hz (typically 4-7 Hz for a voice)
    /// * `depth` - Fractional depth (0.003 is a mild wobble)
    pub fn new(rate: f64, depth: f64) -> Self {
        Self { rate, depth }
    }

    /// Returns a vibrato with no modulation.
    pub fn none() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Phase multiplier `1 + depth * sin(2π * rate * t)` at time `t`.
    pub fn factor(&self, t: f64) -> f64 {
        1.0 + self.depth * (TAU * self.rate * t).sin()
    }
}

impl From<VibratoParams> for Vibrato {
    fn from(params: VibratoParams) -> Self {
        Self::new(params.rate_hz, params.depth)
    }
}
