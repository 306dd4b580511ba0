//! ahtone audio backend
//!
//! Synthesizes a single vowel-like "ah" tone and serializes it as a mono
//! 16-bit PCM WAV file.
//!
//! # Overview
//!
//! The tone is a closed-form additive synthesis:
//!
//! - **Envelope** - linear attack, then a linear fade to silence at the end
//! - **Vibrato** - a shared sinusoidal wobble on every partial's phase
//! - **Harmonics** - weighted partials normalized by their amplitude sum
//! - **Quantization** - scale, hard clamp to [-1, 1], truncate to `i16`
//!
//! # Determinism
//!
//! There is no randomness. The same [`SynthParams`] always produce
//! byte-identical WAV data and the same BLAKE3 PCM hash.
//!
//! # Example
//!
//! ```no_run
//! use ahtone_audio::{generate, write_wav_file, SynthParams};
//! use std::path::Path;
//!
//! let result = generate(&SynthParams::default())?;
//! write_wav_file(Path::new("public/sounds/human_ah.wav"), &result.wav.wav_data)?;
//! println!("PCM hash: {}", result.wav.pcm_hash);
//! # Ok::<(), ahtone_audio::ToneError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Main entry point: params in, samples and WAV bytes out
//! - [`params`] - Synthesis parameters and validation
//! - [`envelope`] - Attack/decay envelope
//! - [`vibrato`] - Phase modulation shared by all harmonics
//! - [`synthesis`] - Harmonic voice
//! - [`wav`] - Deterministic WAV writer and header reader

pub mod envelope;
pub mod error;
pub mod generate;
pub mod params;
pub mod synthesis;
pub mod vibrato;
pub mod wav;

// Re-export main types at crate root
pub use error::{ToneError, ToneResult};
pub use generate::{generate, render, synthesize, GenerateResult};
pub use params::{Harmonic, SynthParams, VibratoParams};
pub use wav::{write_wav_file, WavResult, WavWriter};
