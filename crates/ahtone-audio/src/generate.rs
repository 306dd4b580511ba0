//! Main entry point for tone generation.
//!
//! Validates a [`SynthParams`], renders the harmonic voice, quantizes it to
//! 16-bit PCM and packs the result into WAV bytes. Nothing here touches the
//! filesystem.

use crate::error::ToneResult;
use crate::params::SynthParams;
use crate::synthesis::HarmonicVoice;
use crate::wav::{quantize_pcm16, WavResult};

/// Result of tone generation.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Quantized samples in synthesis order.
    pub samples: Vec<i16>,
    /// WAV file data.
    pub wav: WavResult,
}

/// Renders the pre-clip float signal for a parameter set.
///
/// Values are the enveloped, normalized harmonic sum, before the overall
/// amplitude and clipping are applied.
pub fn render(params: &SynthParams) -> ToneResult<Vec<f64>> {
    params.validate()?;
    let voice = HarmonicVoice::from_params(params);
    Ok(voice.synthesize(params.num_samples(), params.sample_rate as f64))
}

/// Synthesizes the quantized sample buffer for a parameter set.
///
/// The buffer always holds exactly `params.num_samples()` entries.
pub fn synthesize(params: &SynthParams) -> ToneResult<Vec<i16>> {
    let signal = render(params)?;
    Ok(quantize_pcm16(&signal, params.amplitude))
}

/// Synthesizes a tone and packs it as a mono 16-bit WAV file.
pub fn generate(params: &SynthParams) -> ToneResult<GenerateResult> {
    let samples = synthesize(params)?;
    let wav = WavResult::from_pcm16(&samples, params.sample_rate)?;
    Ok(GenerateResult { samples, wav })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToneError;
    use crate::params::Harmonic;
    use crate::wav::{clip_sample, read_wav_header, WAV_HEADER_SIZE};

    fn short_params() -> SynthParams {
        SynthParams {
            sample_rate: 22050,
            duration_seconds: 0.25,
            ..SynthParams::default()
        }
    }

    #[test]
    fn test_default_scenario() {
        let result = generate(&SynthParams::default()).unwrap();
        assert_eq!(result.samples.len(), 52920);
        assert_eq!(result.wav.num_samples, 52920);
        assert_eq!(result.wav.data_size(), 105840);
        assert_eq!(result.wav.wav_data.len(), WAV_HEADER_SIZE + 105840);
        assert_eq!(result.samples[0], 0);
    }

    #[test]
    fn test_length_matches_rounded_duration() {
        for (rate, duration) in [(8000, 0.1), (22050, 0.333), (44100, 0.05), (48000, 1.0)] {
            let params = SynthParams {
                sample_rate: rate,
                duration_seconds: duration,
                ..SynthParams::default()
            };
            let samples = synthesize(&params).unwrap();
            let expected = (rate as f64 * duration).round() as usize;
            assert_eq!(samples.len(), expected, "rate={} duration={}", rate, duration);
        }
    }

    #[test]
    fn test_clipped_values_stay_in_range() {
        let params = short_params().with_amplitude(5.0);
        let signal = render(&params).unwrap();
        for &s in &signal {
            let clipped = clip_sample(s, params.amplitude);
            assert!((-1.0..=1.0).contains(&clipped));
        }
        let samples = synthesize(&params).unwrap();
        assert!(samples.iter().all(|&s| s >= -32767));
        assert!(samples.contains(&32767) || samples.contains(&-32767));
    }

    #[test]
    fn test_amplitude_scales_linearly() {
        let base = synthesize(&short_params().with_amplitude(0.2)).unwrap();
        let doubled = synthesize(&short_params().with_amplitude(0.4)).unwrap();
        assert_eq!(base.len(), doubled.len());
        for (&a, &b) in base.iter().zip(doubled.iter()) {
            // Truncation contributes at most one LSB per rendering.
            assert!((b as i32 - 2 * a as i32).abs() <= 2, "a={} b={}", a, b);
        }
    }

    #[test]
    fn test_zero_amplitude_is_silent() {
        let samples = synthesize(&short_params().with_amplitude(0.0)).unwrap();
        assert!(samples.iter().all(|&s| s == 0));
    }

    #[test]
    fn test_generation_determinism() {
        let a = generate(&SynthParams::default()).unwrap();
        let b = generate(&SynthParams::default()).unwrap();
        assert_eq!(a.wav.pcm_hash, b.wav.pcm_hash);
        assert_eq!(a.wav.wav_data, b.wav.wav_data);
    }

    #[test]
    fn test_different_voices_differ() {
        let a = generate(&short_params()).unwrap();
        let b = generate(&SynthParams {
            harmonics: vec![Harmonic::new(1, 1.0)],
            ..short_params()
        })
        .unwrap();
        assert_ne!(a.wav.pcm_hash, b.wav.pcm_hash);
    }

    #[test]
    fn test_header_matches_params() {
        let result = generate(&short_params()).unwrap();
        let header = read_wav_header(&result.wav.wav_data).unwrap();
        assert_eq!(header.channels, 1);
        assert_eq!(header.bits_per_sample, 16);
        assert_eq!(header.sample_rate, 22050);
        assert_eq!(header.num_frames(), result.samples.len());
    }

    #[test]
    fn test_invalid_params_fail_before_rendering() {
        let params = SynthParams {
            duration_seconds: 0.01,
            ..SynthParams::default()
        };
        assert!(matches!(
            generate(&params),
            Err(ToneError::InvalidDuration { .. })
        ));

        let params = SynthParams {
            sample_rate: 0,
            ..SynthParams::default()
        };
        assert!(matches!(
            synthesize(&params),
            Err(ToneError::InvalidSampleRate { .. })
        ));
    }
}
