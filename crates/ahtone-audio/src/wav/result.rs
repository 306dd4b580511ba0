//! WAV file generation result type.

use crate::error::{ToneError, ToneResult};

use super::format::WavFormat;
use super::pcm::pcm_hash;
use super::writer::{pcm16_to_bytes, write_wav_to_vec};

/// Result of WAV file generation.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Creates a WavResult from quantized mono samples.
    ///
    /// Fails if the samples do not fit a single RIFF file.
    pub fn from_pcm16(samples: &[i16], sample_rate: u32) -> ToneResult<Self> {
        let pcm = pcm16_to_bytes(samples);
        let pcm_hash = pcm_hash(&pcm);
        let format = WavFormat::mono(sample_rate);
        let wav_data =
            write_wav_to_vec(&format, &pcm).map_err(|e| ToneError::invalid_wav(e.to_string()))?;

        Ok(Self {
            wav_data,
            pcm_hash,
            sample_rate,
            num_samples: samples.len(),
        })
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// Size of the data section in bytes.
    pub fn data_size(&self) -> usize {
        self.num_samples * 2
    }
}
