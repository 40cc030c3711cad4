//! Mathematical constant presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, ValidationError};

/// A built-in digit string taken from a well-known constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Circle constant π.
    Pi,
    /// Euler's number e.
    E,
    /// Golden ratio φ.
    Phi,
}

impl Preset {
    /// Every preset, in display order.
    pub const ALL: [Preset; 3] = [Preset::Pi, Preset::E, Preset::Phi];

    /// The first 51 significant digits of the constant.
    pub fn digits(&self) -> &'static str {
        match self {
            Preset::Pi => "314159265358979323846264338327950288419716939937510",
            Preset::E => "271828182845904523536028747135266249775724709369995",
            Preset::Phi => "161803398874989484820458683436563811772030917980576",
        }
    }

    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Pi => "pi",
            Preset::E => "e",
            Preset::Phi => "phi",
        }
    }

    /// Short description of the constant.
    pub fn description(&self) -> &'static str {
        match self {
            Preset::Pi => "Ratio of a circle's circumference to its diameter",
            Preset::E => "Base of the natural logarithm, the limit of continuous compounding",
            Preset::Phi => "The golden ratio, (1 + sqrt 5) / 2",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pi" | "π" => Ok(Preset::Pi),
            "e" => Ok(Preset::E),
            "phi" | "φ" | "golden" => Ok(Preset::Phi),
            other => Err(ValidationError::with_path(
                ErrorCode::UnknownPreset,
                format!("unknown preset '{}'", other),
                "preset",
            )),
        }
    }
}
