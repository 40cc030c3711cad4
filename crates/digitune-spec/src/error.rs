//! Error types for request validation and processing.

use thiserror::Error;

/// Error codes for request and configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request errors (E001-E009)
    /// E001: Tempo outside the supported range
    InvalidTempo,
    /// E002: Octave outside the supported range
    InvalidOctave,
    /// E003: Unknown style name
    UnknownStyle,
    /// E004: Unknown preset name
    UnknownPreset,

    // Configuration errors (E010-E019)
    /// E010: Sample rate is zero or above the supported maximum
    InvalidSampleRate,
    /// E011: Voice gain outside [0, 1]
    InvalidGain,
    /// E012: Echo delay or decay out of range
    InvalidEcho,
    /// E013: Normalization ceiling outside (0, 1]
    InvalidCeiling,
    /// E014: Envelope fractions out of range
    InvalidEnvelope,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidTempo => "E001",
            ErrorCode::InvalidOctave => "E002",
            ErrorCode::UnknownStyle => "E003",
            ErrorCode::UnknownPreset => "E004",
            ErrorCode::InvalidSampleRate => "E010",
            ErrorCode::InvalidGain => "E011",
            ErrorCode::InvalidEcho => "E012",
            ErrorCode::InvalidCeiling => "E013",
            ErrorCode::InvalidEnvelope => "E014",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Path to the problematic field (e.g., "gains.pad").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a field path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Top-level error type for request operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// A request or configuration field failed validation.
    #[error("validation failed: {0}")]
    Invalid(#[from] ValidationError),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackendError for SpecError {
    fn code(&self) -> &'static str {
        match self {
            SpecError::Invalid(_) => "SPEC_001",
            SpecError::JsonParse(_) => "SPEC_002",
            SpecError::Io(_) => "SPEC_003",
        }
    }

    fn category(&self) -> &'static str {
        "spec"
    }
}

/// Common trait for backend errors.
///
/// Every error type surfaced to a caller implements this trait so reports can
/// carry a stable code alongside the human-readable message.
///
/// # Example
///
/// ```ignore
/// use digitune_spec::error::BackendError;
///
/// fn handle_error<E: BackendError>(err: E) {
///     eprintln!("[{}] {}", err.code(), err.message());
/// }
/// ```
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "AUDIO_001" or "SPEC_002". These codes are
    /// stable and can be used for programmatic error handling.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}
