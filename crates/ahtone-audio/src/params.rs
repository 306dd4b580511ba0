//! Synthesis parameters for the "ah" voice.
//!
//! [`SynthParams::default()`] is the fixed voice the CLI renders. The struct is
//! serde-friendly so a parameter set can also be expressed as JSON; any field
//! left out falls back to the default voice.

use serde::{Deserialize, Serialize};

use crate::error::{ToneError, ToneResult};

/// Longest tone accepted, in seconds.
pub const MAX_DURATION_SECONDS: f64 = 30.0;

/// A single harmonic partial: integer multiple of the fundamental and its
/// relative amplitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Harmonic {
    /// Harmonic number (1 = fundamental).
    pub number: u32,
    /// Relative amplitude.
    pub amplitude: f64,
}

impl Harmonic {
    /// Creates a harmonic partial.
    pub const fn new(number: u32, amplitude: f64) -> Self {
        Self { number, amplitude }
    }
}

/// Vibrato (periodic pitch modulation) settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VibratoParams {
    /// Modulation rate in Hz.
    #[serde(default = "default_vibrato_rate")]
    pub rate_hz: f64,
    /// Modulation depth as a fraction of the phase argument.
    #[serde(default = "default_vibrato_depth")]
    pub depth: f64,
}

impl Default for VibratoParams {
    fn default() -> Self {
        Self {
            rate_hz: default_vibrato_rate(),
            depth: default_vibrato_depth(),
        }
    }
}

/// Parameters for one synthesis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthParams {
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Duration of the tone in seconds.
    #[serde(default = "default_duration")]
    pub duration_seconds: f64,
    /// Linear attack time in seconds.
    #[serde(default = "default_attack")]
    pub attack_seconds: f64,
    /// Fundamental frequency (F0) in Hz.
    #[serde(default = "default_fundamental")]
    pub fundamental_hz: f64,
    /// Vibrato settings shared by every harmonic.
    #[serde(default)]
    pub vibrato: VibratoParams,
    /// Harmonic partials, in order of summation.
    #[serde(default = "default_harmonics")]
    pub harmonics: Vec<Harmonic>,
    /// Overall amplitude scale applied before clipping.
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
}

fn default_sample_rate() -> u32 {
    44100
}

fn default_duration() -> f64 {
    1.2
}

fn default_attack() -> f64 {
    0.02
}

fn default_fundamental() -> f64 {
    130.0
}

fn default_vibrato_rate() -> f64 {
    5.0
}

fn default_vibrato_depth() -> f64 {
    0.003
}

fn default_harmonics() -> Vec<Harmonic> {
    vec![
        Harmonic::new(1, 1.0),
        Harmonic::new(2, 0.6),
        Harmonic::new(3, 0.4),
        Harmonic::new(4, 0.2),
        Harmonic::new(5, 0.1),
    ]
}

fn default_amplitude() -> f64 {
    0.8
}

impl Default for SynthParams {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            duration_seconds: default_duration(),
            attack_seconds: default_attack(),
            fundamental_hz: default_fundamental(),
            vibrato: VibratoParams::default(),
            harmonics: default_harmonics(),
            amplitude: default_amplitude(),
        }
    }
}

impl SynthParams {
    /// Parses parameters from JSON. Missing fields take the default voice.
    pub fn from_json(json: &str) -> ToneResult<Self> {
        serde_json::from_str(json).map_err(|e| ToneError::invalid_param("params", e.to_string()))
    }

    /// Returns a copy with a different overall amplitude.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Number of samples the tone occupies: `round(sample_rate * duration)`.
    pub fn num_samples(&self) -> usize {
        (self.sample_rate as f64 * self.duration_seconds).round() as usize
    }

    /// Sum of relative harmonic amplitudes, the normalization divisor.
    pub fn amplitude_sum(&self) -> f64 {
        self.harmonics.iter().map(|h| h.amplitude).sum()
    }

    /// Checks that the parameters describe a well-defined tone.
    pub fn validate(&self) -> ToneResult<()> {
        if self.sample_rate == 0 {
            return Err(ToneError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if !self.attack_seconds.is_finite() || self.attack_seconds < 0.0 {
            return Err(ToneError::invalid_param(
                "attack_seconds",
                format!("must be finite and >= 0, got {}", self.attack_seconds),
            ));
        }
        if !self.duration_seconds.is_finite() || self.duration_seconds <= self.attack_seconds {
            return Err(ToneError::InvalidDuration {
                duration: self.duration_seconds,
                attack: self.attack_seconds,
            });
        }
        if self.duration_seconds > MAX_DURATION_SECONDS {
            return Err(ToneError::invalid_param(
                "duration_seconds",
                format!(
                    "must be <= {} seconds, got {}",
                    MAX_DURATION_SECONDS, self.duration_seconds
                ),
            ));
        }
        if self.num_samples() == 0 {
            return Err(ToneError::invalid_param(
                "duration_seconds",
                format!(
                    "{} seconds at {} Hz produces no samples",
                    self.duration_seconds, self.sample_rate
                ),
            ));
        }
        if !self.fundamental_hz.is_finite() || self.fundamental_hz <= 0.0 {
            return Err(ToneError::invalid_param(
                "fundamental_hz",
                format!("must be finite and > 0, got {}", self.fundamental_hz),
            ));
        }
        if !self.vibrato.rate_hz.is_finite() || !self.vibrato.depth.is_finite() {
            return Err(ToneError::invalid_param(
                "vibrato",
                format!(
                    "rate and depth must be finite, got rate={} depth={}",
                    self.vibrato.rate_hz, self.vibrato.depth
                ),
            ));
        }
        if self.harmonics.is_empty() {
            return Err(ToneError::invalid_param("harmonics", "must not be empty"));
        }
        for (idx, harmonic) in self.harmonics.iter().enumerate() {
            if harmonic.number == 0 {
                return Err(ToneError::invalid_param(
                    format!("harmonics[{}].number", idx),
                    "must be >= 1",
                ));
            }
            if !harmonic.amplitude.is_finite() {
                return Err(ToneError::invalid_param(
                    format!("harmonics[{}].amplitude", idx),
                    format!("must be finite, got {}", harmonic.amplitude),
                ));
            }
        }
        let sum = self.amplitude_sum();
        if !sum.is_finite() || sum == 0.0 {
            return Err(ToneError::invalid_param(
                "harmonics",
                format!("amplitudes must not sum to zero, got {}", sum),
            ));
        }
        if !self.amplitude.is_finite() || self.amplitude < 0.0 {
            return Err(ToneError::invalid_param(
                "amplitude",
                format!("must be finite and >= 0, got {}", self.amplitude),
            ));
        }
        Ok(())
    }
}
