//! WAV file writer builder pattern.

use crate::error::{ToneError, ToneResult};

use super::format::WavFormat;
use super::pcm::pcm_hash;
use super::writer::{pcm16_to_bytes, write_wav_to_vec};

/// WAV file writer builder.
#[derive(Debug)]
pub struct WavWriter {
    format: WavFormat,
}

impl WavWriter {
    /// Creates a new WAV writer with mono format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            format: WavFormat::mono(sample_rate),
        }
    }

    /// Format this writer emits.
    pub fn format(&self) -> WavFormat {
        self.format
    }

    /// Writes quantized samples to a byte vector.
    pub fn write_pcm16(&self, samples: &[i16]) -> ToneResult<Vec<u8>> {
        write_wav_to_vec(&self.format, &pcm16_to_bytes(samples))
            .map_err(|e| ToneError::invalid_wav(e.to_string()))
    }

    /// Returns the BLAKE3 hash of the PCM data (not the full WAV file).
    pub fn pcm_hash(&self, samples: &[i16]) -> String {
        pcm_hash(&pcm16_to_bytes(samples))
    }
}
