//! Error types for audio backend.

use digitune_spec::{BackendError, SpecError, ValidationError};
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during audio generation.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Request or configuration rejected by validation.
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: f64,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// A WAV header field does not fit in 32 bits.
    #[error("WAV {field} overflows 32 bits: {value}")]
    WavOverflow {
        /// Header field that overflowed.
        field: &'static str,
        /// The value that did not fit.
        value: u64,
    },
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl From<ValidationError> for AudioError {
    fn from(err: ValidationError) -> Self {
        Self::Spec(SpecError::from(err))
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::Spec(inner) => inner.code(),
            AudioError::InvalidSampleRate { .. } => "AUDIO_001",
            AudioError::InvalidDuration { .. } => "AUDIO_002",
            AudioError::InvalidFrequency { .. } => "AUDIO_003",
            AudioError::InvalidParameter { .. } => "AUDIO_004",
            AudioError::WavOverflow { .. } => "AUDIO_005",
        }
    }

    fn category(&self) -> &'static str {
        match self {
            AudioError::Spec(inner) => inner.category(),
            _ => "audio",
        }
    }
}
