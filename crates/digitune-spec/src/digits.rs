//! Digit filtering and chart extraction.

use serde::{Deserialize, Serialize};

/// Maximum number of entries in a chart sequence.
pub const CHART_LIMIT: usize = 50;

/// An ordered sequence of decimal digits in playback order.
///
/// Built from free text by discarding every character that is not an ASCII
/// digit. Order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DigitSequence(Vec<u8>);

impl DigitSequence {
    /// Filters `text` down to its decimal digits.
    ///
    /// # Example
    /// ```
    /// use digitune_spec::DigitSequence;
    ///
    /// let digits = DigitSequence::parse("1987-06-05");
    /// assert_eq!(digits.as_slice(), &[1, 9, 8, 7, 0, 6, 0, 5]);
    /// ```
    pub fn parse(text: &str) -> Self {
        Self(
            text.bytes()
                .filter(u8::is_ascii_digit)
                .map(|b| b - b'0')
                .collect(),
        )
    }

    /// Returns the digits as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no digits survived filtering.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the digits in playback order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// Non-zero digits in order, capped at [`CHART_LIMIT`] entries.
    ///
    /// This is the sequence an on-screen chart plots. It is derived from the
    /// digits alone and never requires synthesis.
    pub fn chart_values(&self) -> Vec<u8> {
        self.iter().filter(|&d| d != 0).take(CHART_LIMIT).collect()
    }
}

impl std::fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in &self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}
