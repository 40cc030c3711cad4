//! JSON output types for machine-readable CLI output.
//!
//! This module provides structured output types for the `--json` flag on
//! `generate`, `styles` and `chart`.

use anyhow::{Context, Result};
use digitune_audio::AudioError;
use digitune_spec::{BackendError, SpecError, ValidationError};
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Validation failures pass through their own `E0xx` codes and backend
/// failures their `SPEC_xxx`/`AUDIO_xxx` codes.
pub mod error_codes {
    /// Configuration file could not be read or parsed
    pub const CONFIG: &str = "CLI_001";
    /// WAV file could not be written
    pub const WRITE: &str = "CLI_002";
    /// Input contained no digits
    pub const NO_AUDIO: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001", "AUDIO_003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Converts a validation error, keeping its field path.
    pub fn from_validation(err: &ValidationError) -> Self {
        Self {
            code: err.code.code().to_string(),
            message: err.message.clone(),
            path: err.path.clone(),
        }
    }

    /// Converts a configuration load error.
    pub fn from_config(err: &SpecError) -> Self {
        match err {
            SpecError::Invalid(inner) => Self::from_validation(inner),
            other => Self::new(error_codes::CONFIG, other.to_string()),
        }
    }

    /// Converts a generation error. Validation failures keep their `E0xx`
    /// code.
    pub fn from_audio(err: &AudioError) -> Self {
        match err {
            AudioError::Spec(SpecError::Invalid(inner)) => Self::from_validation(inner),
            other => Self::new(other.code(), other.message()),
        }
    }
}

/// Output of `generate --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateOutput {
    /// Whether a WAV file was written
    pub success: bool,
    /// Errors, empty on success
    pub errors: Vec<JsonError>,
    /// Generation details on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateReport>,
}

impl GenerateOutput {
    /// Creates a successful output.
    pub fn success(result: GenerateReport) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(error: JsonError) -> Self {
        Self {
            success: false,
            errors: vec![error],
            result: None,
        }
    }
}

/// Details of a written WAV file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateReport {
    /// Description of the digit source
    pub source: String,
    /// Style name
    pub style: String,
    /// Tempo in beats per minute
    pub tempo_bpm: u32,
    /// Octave
    pub octave: i32,
    /// Noise seed
    pub seed: u32,
    /// Path of the written WAV file
    pub output_path: String,
    /// Number of digits rendered
    pub num_digits: usize,
    /// Number of samples
    pub num_samples: usize,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
    /// Non-zero digits for charting
    pub chart: Vec<u8>,
}

/// One entry of `styles --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StyleEntry {
    /// Style name as accepted by `--style`
    pub name: String,
    /// Human-readable description
    pub description: String,
}

/// One preset entry of `styles --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PresetEntry {
    /// Preset name as accepted by `--preset`
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Digit string
    pub digits: String,
}

/// Output of `styles --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StylesOutput {
    /// Available styles
    pub styles: Vec<StyleEntry>,
    /// Available presets
    pub presets: Vec<PresetEntry>,
}

/// Output of `chart --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartOutput {
    /// Whether the input resolved
    pub success: bool,
    /// Errors, empty on success
    pub errors: Vec<JsonError>,
    /// Non-zero digits, capped
    pub chart: Vec<u8>,
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use digitune_spec::ErrorCode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_skips_missing_path() {
        let json = serde_json::to_string(&JsonError::new("CLI_002", "disk full")).unwrap();
        assert_eq!(json, r#"{"code":"CLI_002","message":"disk full"}"#);
    }

    #[test]
    fn test_validation_code_passes_through() {
        let err = ValidationError::with_path(ErrorCode::InvalidTempo, "too fast", "tempo_bpm");
        let json = JsonError::from_audio(&AudioError::from(err));
        assert_eq!(json.code, "E001");
        assert_eq!(json.path.as_deref(), Some("tempo_bpm"));
    }

    #[test]
    fn test_backend_code_passes_through() {
        let json = JsonError::from_audio(&AudioError::InvalidFrequency { freq: -1.0 });
        assert_eq!(json.code, "AUDIO_003");
    }

    #[test]
    fn test_failure_output_shape() {
        let output = GenerateOutput::failure(JsonError::new(error_codes::NO_AUDIO, "no audio"));
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["errors"][0]["code"], "CLI_003");
        assert!(value.get("result").is_none());
    }
}
