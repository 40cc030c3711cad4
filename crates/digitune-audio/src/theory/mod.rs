//! Music theory: scales, rhythm templates, the style table and the
//! digit-to-phrase mapper.

pub mod phrase;
pub mod rhythm;
pub mod scale;
pub mod style;

pub use phrase::{map_digit, NoteEvent, Phrase, MAJOR_TRIAD};
pub use rhythm::{pattern_beats, NoteStep, RhythmTemplate};
pub use scale::{midi_to_freq, Scale, MIN_SCALE_LEN};
pub use style::{EnvelopeKind, PercussionSpec, StyleConfig, VoiceSpec};
