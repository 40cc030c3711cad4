//! Rhythm templates.
//!
//! A template is a list of patterns. The pattern for a digit is
//! `patterns[digit % patterns.len()]`, and each step of a pattern is one
//! melody event: a length in beats and a pitch ratio against the digit's
//! note.

use crate::error::{AudioError, AudioResult};

/// One melody event of a pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteStep {
    /// Length in beats.
    pub beats: f64,
    /// Frequency multiplier applied to the digit's note.
    pub ratio: f64,
}

impl NoteStep {
    /// Creates a step.
    pub const fn new(beats: f64, ratio: f64) -> Self {
        Self { beats, ratio }
    }

    /// A step at the digit's own pitch.
    pub const fn unison(beats: f64) -> Self {
        Self::new(beats, 1.0)
    }
}

/// A validated list of rhythm patterns.
#[derive(Debug, Clone, PartialEq)]
pub struct RhythmTemplate {
    patterns: Vec<Vec<NoteStep>>,
}

impl RhythmTemplate {
    /// Creates a template.
    ///
    /// # Errors
    /// Fails if there are no patterns, a pattern is empty, or a step has a
    /// non-positive or non-finite length or ratio.
    pub fn new(patterns: Vec<Vec<NoteStep>>) -> AudioResult<Self> {
        if patterns.is_empty() {
            return Err(AudioError::invalid_param(
                "rhythm",
                "template needs at least one pattern",
            ));
        }
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.is_empty() {
                return Err(AudioError::invalid_param(
                    "rhythm",
                    format!("pattern {} is empty", i),
                ));
            }
            let positive = |x: f64| x.is_finite() && x > 0.0;
            if let Some(step) = pattern
                .iter()
                .find(|s| !positive(s.beats) || !positive(s.ratio))
            {
                return Err(AudioError::invalid_param(
                    "rhythm",
                    format!(
                        "pattern {} has invalid step ({} beats, ratio {})",
                        i, step.beats, step.ratio
                    ),
                ));
            }
        }
        Ok(Self { patterns })
    }

    /// Dotted-eighth, eighth, quarter; the reverse order on odd digits.
    pub fn shuffle() -> AudioResult<Self> {
        Self::new(vec![
            vec![
                NoteStep::unison(0.75),
                NoteStep::unison(0.5),
                NoteStep::unison(1.0),
            ],
            vec![
                NoteStep::unison(1.0),
                NoteStep::unison(0.5),
                NoteStep::unison(0.75),
            ],
        ])
    }

    /// Three equal beats arpeggiating root, major third and fifth.
    pub fn waltz() -> AudioResult<Self> {
        Self::new(vec![vec![
            NoteStep::new(1.0, 1.0),
            NoteStep::new(1.0, 5.0 / 4.0),
            NoteStep::new(1.0, 3.0 / 2.0),
        ]])
    }

    /// One note held for `beats`.
    pub fn sustained(beats: f64) -> AudioResult<Self> {
        Self::new(vec![vec![NoteStep::unison(beats)]])
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always false for a validated template.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Pattern selected by `digit`.
    pub fn pattern_for(&self, digit: u8) -> &[NoteStep] {
        &self.patterns[digit as usize % self.patterns.len()]
    }
}

/// Total length of a pattern in beats.
pub fn pattern_beats(pattern: &[NoteStep]) -> f64 {
    pattern.iter().map(|s| s.beats).sum()
}
