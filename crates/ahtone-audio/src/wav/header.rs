//! WAV header parsing for read-back verification.

use crate::error::{ToneError, ToneResult};

use super::pcm::{read_u16_le, read_u32_le};
use super::writer::WAV_HEADER_SIZE;

/// Information decoded from a RIFF/WAVE header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Size declared in the RIFF chunk header (file length minus 8).
    pub riff_size: u32,
    /// Audio format code (1 = PCM).
    pub audio_format: u16,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Byte rate (sample_rate * block_align).
    pub byte_rate: u32,
    /// Block alignment (channels * bits_per_sample / 8).
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Size declared for the data chunk.
    pub data_size: u32,
}

impl WavHeader {
    /// Number of sample frames in the data chunk.
    pub fn num_frames(&self) -> usize {
        if self.block_align == 0 {
            return 0;
        }
        self.data_size as usize / self.block_align as usize
    }

    /// Checks that the derived fields agree with each other.
    pub fn is_consistent(&self) -> bool {
        let expected_align = self.channels as u32 * (self.bits_per_sample as u32 / 8);
        self.block_align as u32 == expected_align
            && self.byte_rate as u64 == self.sample_rate as u64 * self.block_align as u64
            && self.data_size % self.block_align.max(1) as u32 == 0
    }
}

/// Parses the header of a WAV file.
///
/// Walks the chunk list for `fmt ` and `data`, checking that the declared
/// RIFF and data sizes fit inside `data`.
pub fn read_wav_header(data: &[u8]) -> ToneResult<WavHeader> {
    if data.len() < WAV_HEADER_SIZE {
        return Err(ToneError::invalid_wav(format!(
            "file too short: {} bytes (minimum {} required)",
            data.len(),
            WAV_HEADER_SIZE
        )));
    }
    if &data[0..4] != b"RIFF" {
        return Err(ToneError::invalid_wav("missing RIFF identifier"));
    }
    if &data[8..12] != b"WAVE" {
        return Err(ToneError::invalid_wav("missing WAVE identifier"));
    }

    let riff_size = read_u32_le(data, 4);
    if riff_size as usize + 8 != data.len() {
        return Err(ToneError::invalid_wav(format!(
            "RIFF size {} does not match file length {}",
            riff_size,
            data.len()
        )));
    }

    let mut fmt: Option<(u16, u16, u32, u32, u16, u16)> = None;
    let mut offset = 12;
    while offset + 8 <= data.len() {
        let chunk_id = &data[offset..offset + 4];
        let chunk_size = read_u32_le(data, offset + 4) as usize;
        let body = offset + 8;

        if chunk_id == b"fmt " {
            if chunk_size < 16 || body + 16 > data.len() {
                return Err(ToneError::invalid_wav(format!(
                    "truncated fmt chunk at offset {}",
                    offset
                )));
            }
            fmt = Some((
                read_u16_le(data, body),
                read_u16_le(data, body + 2),
                read_u32_le(data, body + 4),
                read_u32_le(data, body + 8),
                read_u16_le(data, body + 12),
                read_u16_le(data, body + 14),
            ));
        } else if chunk_id == b"data" {
            let (audio_format, channels, sample_rate, byte_rate, block_align, bits_per_sample) =
                fmt.ok_or_else(|| ToneError::invalid_wav("data chunk found before fmt chunk"))?;
            if body + chunk_size > data.len() {
                return Err(ToneError::invalid_wav(format!(
                    "data chunk declares {} bytes but only {} remain",
                    chunk_size,
                    data.len() - body
                )));
            }
            return Ok(WavHeader {
                riff_size,
                audio_format,
                channels,
                sample_rate,
                byte_rate,
                block_align,
                bits_per_sample,
                data_size: chunk_size as u32,
            });
        }

        // Chunks are word-aligned
        offset = body + ((chunk_size + 1) & !1);
    }

    if fmt.is_none() {
        return Err(ToneError::invalid_wav("missing fmt chunk"));
    }
    Err(ToneError::invalid_wav("missing data chunk"))
}
