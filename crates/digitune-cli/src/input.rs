//! Input resolution for CLI commands.
//!
//! Turns raw command-line strings into typed requests: a digit source (free
//! text or a built-in preset), a style and a synthesis configuration.

use digitune_spec::{DigitSequence, Preset, SpecError, Style, SynthConfig, ValidationError};

/// Where the digits of a command come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitInput {
    /// Raw digit text. May contain non-digit characters, which are ignored.
    pub text: String,
    /// The preset the text came from, if any.
    pub preset: Option<Preset>,
}

impl DigitInput {
    /// Resolves `--digits` / `--preset`. A preset takes precedence; with
    /// neither given the input is empty.
    pub fn resolve(digits: Option<&str>, preset: Option<&str>) -> Result<Self, ValidationError> {
        match (preset, digits) {
            (Some(name), _) => {
                let preset: Preset = name.parse()?;
                Ok(Self {
                    text: preset.digits().to_string(),
                    preset: Some(preset),
                })
            }
            (None, Some(text)) => Ok(Self {
                text: text.to_string(),
                preset: None,
            }),
            (None, None) => Ok(Self {
                text: String::new(),
                preset: None,
            }),
        }
    }

    /// The filtered digit sequence.
    pub fn sequence(&self) -> DigitSequence {
        DigitSequence::parse(&self.text)
    }

    /// Human-readable description of the source.
    pub fn label(&self) -> String {
        match self.preset {
            Some(preset) => format!("preset {} ({})", preset, preset.description()),
            None => format!("digits \"{}\"", self.text),
        }
    }
}

/// Parses a style name.
pub fn parse_style(name: &str) -> Result<Style, ValidationError> {
    name.parse()
}

/// Loads the synthesis configuration from a JSON file, or the defaults.
pub fn load_config(path: Option<&str>) -> Result<SynthConfig, SpecError> {
    match path {
        Some(path) => SynthConfig::load(path),
        None => Ok(SynthConfig::default()),
    }
}
