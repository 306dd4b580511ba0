//! Additive synthesis of the vowel-like voice.
//!
//! The voice sums a fixed set of harmonic partials under a shared vibrato,
//! normalizes by the total partial amplitude and shapes the result with the
//! attack/decay envelope. Output is the pre-clip float signal.

use std::f64::consts::TAU;

use crate::envelope::AttackDecayEnvelope;
use crate::params::{Harmonic, SynthParams};
use crate::vibrato::Vibrato;

/// Harmonic voice with vibrato and an attack/decay envelope.
#[derive(Debug, Clone)]
pub struct HarmonicVoice {
    /// Fundamental frequency in Hz.
    pub fundamental: f64,
    /// Harmonic partials.
    pub harmonics: Vec<Harmonic>,
    /// Vibrato applied to every partial's phase.
    pub vibrato: Vibrato,
    /// Amplitude envelope.
    pub envelope: AttackDecayEnvelope,
    /// Normalization divisor (sum of partial amplitudes).
    amplitude_sum: f64,
}

impl HarmonicVoice {
    /// Creates a voice from explicit parts.
    pub fn new(
        fundamental: f64,
        harmonics: Vec<Harmonic>,
        vibrato: Vibrato,
        envelope: AttackDecayEnvelope,
    ) -> Self {
        let amplitude_sum = harmonics.iter().map(|h| h.amplitude).sum();
        Self {
            fundamental,
            harmonics,
            vibrato,
            envelope,
            amplitude_sum,
        }
    }

    /// Builds the voice described by a parameter set.
    pub fn from_params(params: &SynthParams) -> Self {
        Self::new(
            params.fundamental_hz,
            params.harmonics.clone(),
            params.vibrato.into(),
            AttackDecayEnvelope::new(params.attack_seconds, params.duration_seconds),
        )
    }

    /// Sum of partials at time `t`, before normalization and envelope.
    pub fn raw_at(&self, t: f64) -> f64 {
        let vib = self.vibrato.factor(t);
        self.harmonics
            .iter()
            .map(|h| h.amplitude * (TAU * self.fundamental * h.number as f64 * t * vib).sin())
            .sum()
    }

    /// Enveloped, normalized sample at time `t`.
    pub fn sample_at(&self, t: f64) -> f64 {
        self.envelope.level_at(t) * (self.raw_at(t) / self.amplitude_sum)
    }

    /// Renders `num_samples` samples, sample `i` taken at `t = i / sample_rate`.
    ///
    /// Values are nominally in range [-1.0, 1.0].
    pub fn synthesize(&self, num_samples: usize, sample_rate: f64) -> Vec<f64> {
        (0..num_samples)
            .map(|i| self.sample_at(i as f64 / sample_rate))
            .collect()
    }
}
