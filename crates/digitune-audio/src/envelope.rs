//! Amplitude envelopes.
//!
//! Most envelopes are defined over the length of the buffer they shape rather
//! than in seconds, so a note keeps its contour at any tempo. The exception is
//! [`EnvelopeShape::Decay`], which falls off at a fixed rate per sample.
//! [`apply_envelope`] always returns a buffer of the same length it was given.

use crate::length::match_length;

/// Amplitude-over-time shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnvelopeShape {
    /// No shaping.
    Flat,
    /// `exp(-k * i / len)`: starts at 1 and decays towards 0 by the end.
    Percussive {
        /// Decay constant.
        k: f64,
    },
    /// `exp(-rate * i)`: decay measured in samples, independent of length.
    Decay {
        /// Decay rate per sample.
        rate: f64,
    },
    /// Linear attack, full-level sustain, linear release.
    Pad {
        /// Fraction of the length spent ramping up.
        attack: f64,
        /// Fraction of the length held at full level.
        sustain: f64,
    },
}

impl EnvelopeShape {
    /// Percussive decay with constant `k`.
    pub fn percussive(k: f64) -> Self {
        Self::Percussive { k: k.max(0.0) }
    }

    /// Decay of `per_second` e-folds per second at `sample_rate`.
    pub fn decay(per_second: f64, sample_rate: f64) -> Self {
        Self::Decay {
            rate: per_second.max(0.0) / sample_rate,
        }
    }

    /// Pad envelope. Fractions are clamped to [0, 1] and the sustain is
    /// shortened if both together exceed the whole note.
    pub fn pad(attack: f64, sustain: f64) -> Self {
        let attack = attack.max(0.0).min(1.0);
        let sustain = sustain.max(0.0).min(1.0 - attack);
        Self::Pad { attack, sustain }
    }
}

/// Builds the attack/sustain/release curve for `len` samples.
///
/// The three segment lengths are rounded independently and may not add up to
/// `len`; the curve is reconciled to exactly `len` samples.
pub fn pad_curve(len: usize, attack: f64, sustain: f64) -> Vec<f64> {
    let segment = |fraction: f64| (len as f64 * fraction.max(0.0)).round() as usize;
    let attack_len = segment(attack);
    let sustain_len = segment(sustain);
    let release_len = segment(1.0 - attack - sustain);

    let mut curve = Vec::with_capacity(attack_len + sustain_len + release_len);
    curve.extend((0..attack_len).map(|i| i as f64 / attack_len as f64));
    curve.extend(std::iter::repeat(1.0).take(sustain_len));
    curve.extend((0..release_len).map(|i| 1.0 - (i + 1) as f64 / release_len as f64));

    match_length(curve, len)
}

/// Builds the percussive decay curve for `len` samples.
pub fn percussive_curve(len: usize, k: f64) -> Vec<f64> {
    (0..len)
        .map(|i| (-k * i as f64 / len as f64).exp())
        .collect()
}

/// Builds a fixed-rate decay curve for `len` samples.
pub fn decay_curve(len: usize, rate: f64) -> Vec<f64> {
    (0..len).map(|i| (-rate * i as f64).exp()).collect()
}

/// Multiplies `buffer` by `shape`. Output length equals input length.
pub fn apply_envelope(mut buffer: Vec<f64>, shape: EnvelopeShape) -> Vec<f64> {
    let len = buffer.len();
    let curve = match shape {
        EnvelopeShape::Flat => return buffer,
        EnvelopeShape::Percussive { k } => percussive_curve(len, k),
        EnvelopeShape::Decay { rate } => decay_curve(len, rate),
        EnvelopeShape::Pad { attack, sustain } => pad_curve(len, attack, sustain),
    };

    for (sample, gain) in buffer.iter_mut().zip(curve) {
        *sample *= gain;
    }
    buffer
}
