//! Renders a [`Phrase`] into per-voice buffers.
//!
//! The melody is the concatenation of its events, each rendered for exactly
//! `num_samples(beats * beat_seconds)` samples, so a rest and a played note of
//! the same rhythm always produce the same length. Accompaniment voices span
//! the phrase's total duration computed in one step and may differ from the
//! melody by a sample; the mixer reconciles them.

use digitune_spec::EnvelopeConfig;
use rand_pcg::Pcg32;

use crate::envelope::apply_envelope;
use crate::error::AudioResult;
use crate::length::{mix_into, num_samples};
use crate::mixer::VoiceBuffers;
use crate::oscillator::render_wave;
use crate::theory::{Phrase, StyleConfig, VoiceSpec};

/// Timing and tuning shared by every phrase of a track.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Output sample rate in Hz.
    pub sample_rate: f64,
    /// Seconds per beat.
    pub beat_seconds: f64,
    /// Envelope constants.
    pub envelope: &'a EnvelopeConfig,
}

impl RenderContext<'_> {
    fn seconds(&self, beats: f64) -> f64 {
        beats * self.beat_seconds
    }

    fn note(
        &self,
        voice: VoiceSpec,
        frequency: f64,
        duration: f64,
        rng: &mut Pcg32,
    ) -> AudioResult<Vec<f64>> {
        let wave = render_wave(frequency, duration, self.sample_rate, voice.waveform, rng)?;
        Ok(apply_envelope(wave, voice.envelope.shape(self.envelope, self.sample_rate)))
    }
}

/// Renders every voice of `phrase`.
///
/// Rests produce a silent melody and no accompaniment.
pub fn render_phrase(
    phrase: &Phrase,
    style: &StyleConfig,
    ctx: &RenderContext<'_>,
    rng: &mut Pcg32,
) -> AudioResult<VoiceBuffers> {
    let mut melody = Vec::new();
    for event in &phrase.events {
        let duration = ctx.seconds(event.beats);
        match event.frequency {
            Some(freq) => melody.extend(ctx.note(style.lead, freq, duration, rng)?),
            None => melody.extend(std::iter::repeat(0.0).take(num_samples(duration, ctx.sample_rate))),
        }
    }

    if phrase.is_rest() {
        return Ok(VoiceBuffers::melody(melody));
    }

    let total = ctx.seconds(phrase.total_beats());

    let pad = match style.pad {
        Some(voice) if !phrase.chord.is_empty() => Some(render_chord(phrase, voice, total, ctx, rng)?),
        _ => None,
    };

    let bass = match (style.bass, phrase.bass) {
        (Some(voice), Some(freq)) => Some(ctx.note(voice, freq, total, rng)?),
        _ => None,
    };

    let percussion = match style.percussion {
        Some(perc) => {
            let mut hits = Vec::new();
            for event in &phrase.events {
                hits.extend(ctx.note(perc.voice, perc.frequency_hz, ctx.seconds(event.beats), rng)?);
            }
            Some(hits)
        }
        None => None,
    };

    Ok(VoiceBuffers {
        melody,
        pad,
        bass,
        percussion,
    })
}

/// Averages the chord tones, then shapes the sum once.
fn render_chord(
    phrase: &Phrase,
    voice: VoiceSpec,
    duration: f64,
    ctx: &RenderContext<'_>,
    rng: &mut Pcg32,
) -> AudioResult<Vec<f64>> {
    let mut sum = vec![0.0; num_samples(duration, ctx.sample_rate)];
    let weight = 1.0 / phrase.chord.len() as f64;
    for &freq in &phrase.chord {
        let tone = render_wave(freq, duration, ctx.sample_rate, voice.waveform, rng)?;
        mix_into(&mut sum, tone, weight);
    }
    Ok(apply_envelope(sum, voice.envelope.shape(ctx.envelope, ctx.sample_rate)))
}
