//! Attack/decay envelope generator.
//!
//! A linear ramp from 0 to 1 over the attack time, followed by a linear fade
//! that reaches 0 exactly at the end of the tone.

/// Attack/decay envelope over a fixed tone length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackDecayEnvelope {
    /// Attack time in seconds.
    pub attack: f64,
    /// Total tone duration in seconds.
    pub duration: f64,
}

impl AttackDecayEnvelope {
    /// Creates a new envelope.
    pub fn new(attack: f64, duration: f64) -> Self {
        Self { attack, duration }
    }

    /// Envelope level at time `t` seconds.
    pub fn level_at(&self, t: f64) -> f64 {
        attack_decay(t, self.attack, self.duration)
    }

    /// Samples the envelope at `t = i / sample_rate` for each index.
    pub fn generate(&self, num_samples: usize, sample_rate: f64) -> Vec<f64> {
        (0..num_samples)
            .map(|i| self.level_at(i as f64 / sample_rate))
            .collect()
    }
}

/// Attack/decay level at time `t`.
///
/// `attack` must be smaller than `duration`; parameter validation guarantees
/// this for every synthesis run.
pub fn attack_decay(t: f64, attack: f64, duration: f64) -> f64 {
    if t < attack {
        t / attack
    } else {
        (1.0 - (t - attack) / (duration - attack)).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_envelope_boundaries() {
        let env = AttackDecayEnvelope::new(0.02, 1.2);
        assert!(env.level_at(0.0).abs() < EPS);
        assert!((env.level_at(0.02) - 1.0).abs() < EPS);
        assert!(env.level_at(1.2).abs() < EPS);
    }

    #[test]
    fn test_attack_is_linear() {
        let env = AttackDecayEnvelope::new(0.02, 1.2);
        assert!((env.level_at(0.01) - 0.5).abs() < EPS);
        assert!((env.level_at(0.005) - 0.25).abs() < EPS);
    }

    #[test]
    fn test_decay_is_linear() {
        let env = AttackDecayEnvelope::new(0.02, 1.2);
        // Halfway through the decay segment.
        assert!((env.level_at(0.61) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_past_duration_stays_silent() {
        let env = AttackDecayEnvelope::new(0.02, 1.2);
        assert_eq!(env.level_at(1.5), 0.0);
        assert_eq!(env.level_at(100.0), 0.0);
    }

    #[test]
    fn test_zero_attack_starts_at_peak() {
        assert!((attack_decay(0.0, 0.0, 1.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_generate_length_and_range() {
        let env = AttackDecayEnvelope::new(0.02, 0.5);
        let samples = env.generate(22050, 44100.0);
        assert_eq!(samples.len(), 22050);
        assert!(samples.iter().all(|&v| (0.0..=1.0).contains(&v)));
        assert_eq!(samples[0], 0.0);

        let peak = samples.iter().cloned().fold(0.0, f64::max);
        assert!(peak > 0.999);
    }
}
