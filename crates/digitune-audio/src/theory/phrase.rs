//! Digit-to-phrase mapping.

use super::style::StyleConfig;

/// Ratios of a major triad: root, major third, fifth.
pub const MAJOR_TRIAD: [f64; 3] = [1.0, 5.0 / 4.0, 3.0 / 2.0];

/// One melody event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteEvent {
    /// Pitch, or `None` for a rest.
    pub frequency: Option<f64>,
    /// Length in beats.
    pub beats: f64,
}

impl NoteEvent {
    /// Returns true if the event is silent.
    pub fn is_rest(&self) -> bool {
        self.frequency.is_none()
    }
}

/// Everything one digit contributes to the track.
#[derive(Debug, Clone, PartialEq)]
pub struct Phrase {
    /// Source digit.
    pub digit: u8,
    /// Melody events in order.
    pub events: Vec<NoteEvent>,
    /// Bass pitch, one octave under the digit's note.
    pub bass: Option<f64>,
    /// Chord pitches, one octave under the digit's note.
    pub chord: Vec<f64>,
}

impl Phrase {
    /// Total length in beats.
    pub fn total_beats(&self) -> f64 {
        self.events.iter().map(|e| e.beats).sum()
    }

    /// Returns true if no event sounds.
    pub fn is_rest(&self) -> bool {
        self.events.iter().all(NoteEvent::is_rest)
    }

    /// Multiplies every pitch by `factor`.
    pub fn transposed(mut self, factor: f64) -> Self {
        for event in &mut self.events {
            event.frequency = event.frequency.map(|f| f * factor);
        }
        self.bass = self.bass.map(|f| f * factor);
        for f in &mut self.chord {
            *f *= factor;
        }
        self
    }
}

/// Maps `digit` to its phrase under `style`.
///
/// The rhythm pattern is chosen by `digit % patterns`; the pitch by
/// `digit % scale length`. Digit 0 keeps its pattern's timing but every event
/// is a rest and there is no accompaniment.
pub fn map_digit(digit: u8, style: &StyleConfig) -> Phrase {
    let pattern = style.rhythm.pattern_for(digit);

    if digit == 0 {
        return Phrase {
            digit,
            events: pattern
                .iter()
                .map(|step| NoteEvent {
                    frequency: None,
                    beats: step.beats,
                })
                .collect(),
            bass: None,
            chord: Vec::new(),
        };
    }

    let root = style.scale.frequency_for(digit);
    let low = root / 2.0;
    Phrase {
        digit,
        events: pattern
            .iter()
            .map(|step| NoteEvent {
                frequency: Some(root * step.ratio),
                beats: step.beats,
            })
            .collect(),
        bass: Some(low),
        chord: MAJOR_TRIAD.iter().map(|r| low * r).collect(),
    }
}
