//! Core WAV writing and PCM conversion functions.

use std::io::{self, Write};

use super::format::WavFormat;

/// Size of the canonical RIFF/WAVE header written by [`write_wav`].
pub const WAV_HEADER_SIZE: usize = 44;

/// Integer full-scale factor for 16-bit quantization.
pub const PCM16_FULL_SCALE: f64 = 32767.0;

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Returns
/// Result indicating success or I/O error
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let (file_size, data_size) = chunk_sizes(pcm_data.len())?;

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
///
/// # Arguments
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Returns
/// Complete WAV file as bytes, or `InvalidInput` when the data chunk does not
/// fit the 32-bit RIFF size fields
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> io::Result<Vec<u8>> {
    chunk_sizes(pcm_data.len())?;
    let mut buffer = Vec::with_capacity(WAV_HEADER_SIZE + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data)?;
    Ok(buffer)
}

/// RIFF chunk size and data chunk size for `data_len` bytes of PCM.
pub(crate) fn chunk_sizes(data_len: usize) -> io::Result<(u32, u32)> {
    let too_large = || {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("PCM data too large for WAV: {} bytes", data_len),
        )
    };
    let data_size = u32::try_from(data_len).map_err(|_| too_large())?;
    // Total file size minus 8 bytes for RIFF header
    let file_size = data_size.checked_add(36).ok_or_else(too_large)?;
    Ok((file_size, data_size))
}

/// Scales a sample by `amplitude` and hard-clamps it to [-1.0, 1.0].
pub fn clip_sample(sample: f64, amplitude: f64) -> f64 {
    (sample * amplitude).clamp(-1.0, 1.0)
}

/// Quantizes float samples to 16-bit PCM values.
///
/// Each sample is scaled by `amplitude`, clamped to [-1.0, 1.0], multiplied by
/// 32767 and truncated toward zero.
pub fn quantize_pcm16(samples: &[f64], amplitude: f64) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (clip_sample(s, amplitude) * PCM16_FULL_SCALE) as i16)
        .collect()
}

/// Packs 16-bit PCM values as little-endian bytes.
pub fn pcm16_to_bytes(samples: &[i16]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&sample.to_le_bytes());
    }
    pcm
}
