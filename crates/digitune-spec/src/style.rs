//! Musical style selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, ValidationError};

/// Musical style applied to a whole composition.
///
/// A style selects the scale, rhythm template and voice timbres used for
/// every digit of a track. There is no per-digit style switching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// Bright music-box lead with a dotted shuffle and sleigh-bell texture.
    #[default]
    Joyful,
    /// Three-beat arpeggiated triads.
    Waltz,
    /// One long choir note per digit over a sustained pad.
    Holy,
    /// Single harmonic tone per digit with a plain decay.
    Classic,
}

impl Style {
    /// Every supported style, in display order.
    pub const ALL: [Style; 4] = [Style::Joyful, Style::Waltz, Style::Holy, Style::Classic];

    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Joyful => "joyful",
            Style::Waltz => "waltz",
            Style::Holy => "holy",
            Style::Classic => "classic",
        }
    }

    /// Returns a one-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Style::Joyful => "C major music box, dotted shuffle, sleigh bells",
            Style::Waltz => "G major triads arpeggiated over three beats",
            Style::Holy => "D major choir, four-beat sustained notes",
            Style::Classic => "C major harmonic tone, one beat per digit",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Style::ALL
            .into_iter()
            .find(|style| style.as_str() == name)
            .ok_or_else(|| {
                ValidationError::with_path(
                    ErrorCode::UnknownStyle,
                    format!("unknown style '{}'", s.trim()),
                    "style",
                )
            })
    }
}
