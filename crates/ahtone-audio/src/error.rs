//! Error types for tone synthesis and WAV output.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for tone operations.
pub type ToneResult<T> = Result<T, ToneError>;

/// Errors that can occur while synthesizing or writing a tone.
#[derive(Debug, Error)]
pub enum ToneError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds (attack is {attack} seconds)")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
        /// Attack time the duration must exceed.
        attack: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Malformed WAV data.
    #[error("invalid WAV data: {message}")]
    InvalidWav {
        /// Error message.
        message: String,
    },

    /// I/O error at a destination path.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being created or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl ToneError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid WAV error.
    pub fn invalid_wav(message: impl Into<String>) -> Self {
        Self::InvalidWav {
            message: message.into(),
        }
    }

    /// Creates an I/O error bound to a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true for errors caused by inconsistent synthesis parameters.
    pub fn is_invalid_params(&self) -> bool {
        matches!(
            self,
            ToneError::InvalidSampleRate { .. }
                | ToneError::InvalidDuration { .. }
                | ToneError::InvalidParameter { .. }
        )
    }

    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            ToneError::InvalidSampleRate { .. } => "TONE_001",
            ToneError::InvalidDuration { .. } => "TONE_002",
            ToneError::InvalidParameter { .. } => "TONE_003",
            ToneError::InvalidWav { .. } => "TONE_004",
            ToneError::Io { .. } => "TONE_005",
        }
    }

    /// Error category for reporting.
    pub fn category(&self) -> &'static str {
        match self {
            ToneError::Io { .. } => "io",
            ToneError::InvalidWav { .. } => "format",
            _ => "params",
        }
    }
}
