//! Style table: the scale, rhythm and voice timbres of each [`Style`].

use digitune_spec::{EnvelopeConfig, Style};

use crate::envelope::EnvelopeShape;
use crate::error::AudioResult;
use crate::oscillator::Waveform;

use super::rhythm::RhythmTemplate;
use super::scale::Scale;

/// C major from C4, MIDI note numbers.
const JOYFUL_SCALE: [u8; 10] = [60, 62, 64, 65, 67, 69, 71, 72, 74, 76];
/// G major from G3.
const WALTZ_SCALE: [u8; 10] = [55, 57, 59, 60, 62, 64, 66, 67, 69, 71];
/// D major from D3.
const HOLY_SCALE: [u8; 10] = [50, 52, 54, 55, 57, 59, 61, 62, 64, 66];
/// Literal frequencies of the classic tone. Index 0 is never sounded since
/// digit 0 is a rest.
const CLASSIC_SCALE: [f64; 10] = [
    246.94, 261.63, 293.66, 329.63, 349.23, 392.00, 440.00, 493.88, 523.25, 587.33,
];

/// Sleigh-bell shimmer carrier of the joyful percussion.
const SHIMMER_HZ: f64 = 6000.0;

/// Decay of the classic tone, `exp(-3 t)` with `t` in seconds.
const CLASSIC_DECAY_PER_SECOND: f64 = 3.0;

/// Which envelope family a voice uses. Parameters of the length-relative
/// families come from [`EnvelopeConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnvelopeKind {
    /// No shaping.
    Flat,
    /// Exponential decay over the note length.
    Percussive,
    /// Exponential decay in absolute time.
    Decay {
        /// E-folds per second.
        per_second: f64,
    },
    /// Attack/sustain/release.
    Pad,
}

impl EnvelopeKind {
    /// Resolves the envelope against tuning parameters and the output rate.
    pub fn shape(self, config: &EnvelopeConfig, sample_rate: f64) -> EnvelopeShape {
        match self {
            EnvelopeKind::Flat => EnvelopeShape::Flat,
            EnvelopeKind::Percussive => EnvelopeShape::percussive(config.percussive_decay),
            EnvelopeKind::Decay { per_second } => EnvelopeShape::decay(per_second, sample_rate),
            EnvelopeKind::Pad => EnvelopeShape::pad(config.attack_fraction, config.sustain_fraction),
        }
    }
}

/// Timbre of one voice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceSpec {
    /// Oscillator.
    pub waveform: Waveform,
    /// Envelope family.
    pub envelope: EnvelopeKind,
}

impl VoiceSpec {
    /// Creates a voice.
    pub const fn new(waveform: Waveform, envelope: EnvelopeKind) -> Self {
        Self { waveform, envelope }
    }
}

/// Unpitched percussion hit on every melody event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercussionSpec {
    /// Timbre.
    pub voice: VoiceSpec,
    /// Carrier frequency, independent of the melody.
    pub frequency_hz: f64,
}

/// Everything needed to turn digits into voices for one style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    /// Style this table entry belongs to.
    pub style: Style,
    /// Note per digit.
    pub scale: Scale,
    /// Rhythm per digit.
    pub rhythm: RhythmTemplate,
    /// Melody voice.
    pub lead: VoiceSpec,
    /// Chord pad, if any.
    pub pad: Option<VoiceSpec>,
    /// Bass, if any.
    pub bass: Option<VoiceSpec>,
    /// Percussion, if any.
    pub percussion: Option<PercussionSpec>,
}

impl StyleConfig {
    /// Built-in configuration for `style`.
    pub fn for_style(style: Style) -> AudioResult<Self> {
        let config = match style {
            Style::Joyful => Self {
                style,
                scale: Scale::from_midi(&JOYFUL_SCALE)?,
                rhythm: RhythmTemplate::shuffle()?,
                lead: VoiceSpec::new(Waveform::Bell, EnvelopeKind::Percussive),
                pad: Some(VoiceSpec::new(Waveform::Chorus, EnvelopeKind::Pad)),
                bass: Some(VoiceSpec::new(Waveform::Sine, EnvelopeKind::Percussive)),
                percussion: Some(PercussionSpec {
                    voice: VoiceSpec::new(Waveform::NoiseBurst, EnvelopeKind::Flat),
                    frequency_hz: SHIMMER_HZ,
                }),
            },
            Style::Waltz => Self {
                style,
                scale: Scale::from_midi(&WALTZ_SCALE)?,
                rhythm: RhythmTemplate::waltz()?,
                lead: VoiceSpec::new(Waveform::Triangle, EnvelopeKind::Percussive),
                pad: Some(VoiceSpec::new(Waveform::Chorus, EnvelopeKind::Pad)),
                bass: Some(VoiceSpec::new(Waveform::Sawtooth, EnvelopeKind::Percussive)),
                percussion: None,
            },
            Style::Holy => Self {
                style,
                scale: Scale::from_midi(&HOLY_SCALE)?,
                rhythm: RhythmTemplate::sustained(4.0)?,
                lead: VoiceSpec::new(Waveform::Chorus, EnvelopeKind::Pad),
                pad: Some(VoiceSpec::new(Waveform::Chorus, EnvelopeKind::Pad)),
                bass: Some(VoiceSpec::new(Waveform::Sine, EnvelopeKind::Pad)),
                percussion: None,
            },
            Style::Classic => Self {
                style,
                scale: Scale::new(CLASSIC_SCALE.to_vec())?,
                rhythm: RhythmTemplate::sustained(1.0)?,
                lead: VoiceSpec::new(
                    Waveform::Rich,
                    EnvelopeKind::Decay {
                        per_second: CLASSIC_DECAY_PER_SECOND,
                    },
                ),
                pad: None,
                bass: None,
                percussion: None,
            },
        };
        Ok(config)
    }
}
