//! Musical scales indexed by digit.

use crate::error::{AudioError, AudioResult};

/// Minimum number of entries in a scale, so every digit 0-9 owns a distinct
/// index.
pub const MIN_SCALE_LEN: usize = 10;

/// Converts a MIDI note number to equal-tempered frequency (A4 = 440 Hz).
pub fn midi_to_freq(note: u8) -> f64 {
    440.0 * 2.0_f64.powf((note as f64 - 69.0) / 12.0)
}

/// An ordered list of positive frequencies.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    frequencies: Vec<f64>,
}

impl Scale {
    /// Creates a scale from explicit frequencies.
    ///
    /// # Errors
    /// Fails if there are fewer than [`MIN_SCALE_LEN`] entries or any entry is
    /// not a finite positive frequency.
    pub fn new(frequencies: Vec<f64>) -> AudioResult<Self> {
        if frequencies.len() < MIN_SCALE_LEN {
            return Err(AudioError::invalid_param(
                "scale",
                format!(
                    "needs at least {} frequencies, got {}",
                    MIN_SCALE_LEN,
                    frequencies.len()
                ),
            ));
        }
        if let Some(&bad) = frequencies.iter().find(|f| !(f.is_finite() && **f > 0.0)) {
            return Err(AudioError::InvalidFrequency { freq: bad });
        }
        Ok(Self { frequencies })
    }

    /// Creates a scale from MIDI note numbers.
    pub fn from_midi(notes: &[u8]) -> AudioResult<Self> {
        Self::new(notes.iter().map(|&n| midi_to_freq(n)).collect())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Always false; a scale has at least [`MIN_SCALE_LEN`] entries.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// The frequencies in index order.
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Scale index for `digit`: `digit % len`.
    pub fn index_for(&self, digit: u8) -> usize {
        digit as usize % self.frequencies.len()
    }

    /// Frequency for `digit`.
    pub fn frequency_for(&self, digit: u8) -> f64 {
        self.frequencies[self.index_for(digit)]
    }
}
