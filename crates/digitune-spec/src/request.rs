//! The composition request.

use serde::{Deserialize, Serialize};

use crate::digits::DigitSequence;
use crate::error::{ErrorCode, SpecError, ValidationError};
use crate::style::Style;

/// Fastest accepted tempo in beats per minute.
pub const MAX_TEMPO_BPM: u32 = 1000;
/// Lowest accepted octave.
pub const MIN_OCTAVE: i32 = 3;
/// Highest accepted octave.
pub const MAX_OCTAVE: i32 = 5;
/// Octave at which scale frequencies are used unshifted.
pub const DEFAULT_OCTAVE: i32 = 4;

/// Parameters for a single composition.
///
/// `digits` may contain arbitrary text; everything that is not an ASCII digit
/// is discarded before synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComposeRequest {
    /// Source text, filtered to decimal digits.
    pub digits: String,
    /// Tempo in beats per minute.
    pub tempo_bpm: u32,
    /// Musical style for the whole track.
    #[serde(default)]
    pub style: Style,
    /// Octave register; 4 leaves the style's scale unshifted.
    #[serde(default = "default_octave")]
    pub octave: i32,
    /// Seed for the noise-based percussion layer.
    #[serde(default)]
    pub seed: u32,
}

fn default_octave() -> i32 {
    DEFAULT_OCTAVE
}

impl ComposeRequest {
    /// Creates a request with the default octave and seed.
    pub fn new(digits: impl Into<String>, tempo_bpm: u32, style: Style) -> Self {
        Self {
            digits: digits.into(),
            tempo_bpm,
            style,
            octave: DEFAULT_OCTAVE,
            seed: 0,
        }
    }

    /// Sets the octave register.
    pub fn with_octave(mut self, octave: i32) -> Self {
        self.octave = octave;
        self
    }

    /// Sets the percussion seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Parses a request from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The filtered digit sequence in playback order.
    pub fn digit_sequence(&self) -> DigitSequence {
        DigitSequence::parse(&self.digits)
    }

    /// Duration of one beat in seconds.
    pub fn beat_seconds(&self) -> f64 {
        60.0 / self.tempo_bpm as f64
    }

    /// Frequency multiplier for the requested octave.
    pub fn octave_factor(&self) -> f64 {
        2.0_f64.powi(self.octave - DEFAULT_OCTAVE)
    }

    /// Validates tempo and octave.
    ///
    /// An empty digit sequence is not an error; it yields "no audio" at
    /// composition time.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.tempo_bpm == 0 || self.tempo_bpm > MAX_TEMPO_BPM {
            return Err(ValidationError::with_path(
                ErrorCode::InvalidTempo,
                format!("must be 1-{}, got {}", MAX_TEMPO_BPM, self.tempo_bpm),
                "tempo_bpm",
            ));
        }
        if !(MIN_OCTAVE..=MAX_OCTAVE).contains(&self.octave) {
            return Err(ValidationError::with_path(
                ErrorCode::InvalidOctave,
                format!(
                    "must be {}-{}, got {}",
                    MIN_OCTAVE, MAX_OCTAVE, self.octave
                ),
                "octave",
            ));
        }
        Ok(())
    }
}
