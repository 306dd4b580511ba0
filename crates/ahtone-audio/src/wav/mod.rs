//! Deterministic WAV file writer.
//!
//! This module writes 16-bit mono PCM WAV files with no timestamps or variable
//! metadata, so identical samples always produce identical bytes. The hash of
//! the PCM data identifies a rendering.

mod builder;
mod file;
mod format;
mod header;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use builder::WavWriter;
pub use file::write_wav_file;
pub use format::WavFormat;
pub use header::{read_wav_header, WavHeader};
pub use pcm::{bytes_to_pcm16, compute_pcm_hash, extract_pcm_data, pcm_hash};
pub use result::WavResult;
pub use writer::{
    clip_sample, pcm16_to_bytes, quantize_pcm16, write_wav, write_wav_to_vec, PCM16_FULL_SCALE,
    WAV_HEADER_SIZE,
};
