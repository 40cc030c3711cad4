//! Oscillator bank.
//!
//! Every oscillator is evaluated directly from absolute time `t = i / sr`
//! rather than from an accumulated phase, so a note's samples depend only on
//! its frequency, its duration and the sample rate. Sawtooth and triangle are
//! built from `floor` for the same reason.
//!
//! Output length is always [`num_samples`]`(duration, sample_rate)`.

use std::f64::consts::PI;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::error::{AudioError, AudioResult};
use crate::length::num_samples;

/// 2π.
pub const TWO_PI: f64 = 2.0 * PI;

/// Relative detune of the outer chorus voices (0.4 %).
pub const CHORUS_DETUNE: f64 = 0.004;

/// Decay constant of the noise-burst amplitude over its duration.
pub const NOISE_BURST_DECAY: f64 = 12.0;

/// Bell partials as `(frequency ratio, weight, decay per second)`.
///
/// The upper partials are slightly inharmonic and die away faster than the
/// fundamental, which gives the metallic strike.
const BELL_PARTIALS: [(f64, f64, f64); 5] = [
    (1.0, 1.0, 0.0),
    (2.0, 0.6, 1.5),
    (3.0, 0.4, 3.0),
    (4.2, 0.25, 5.0),
    (5.4, 0.2, 7.0),
];

/// Harmonic stack of the rich tone as `(multiple, weight)`.
const RICH_HARMONICS: [(f64, f64); 3] = [(1.0, 0.5), (2.0, 0.2), (3.0, 0.1)];

/// Waveform produced by [`render_wave`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Waveform {
    /// Pure tone.
    Sine,
    /// `2 (f t - floor(f t + 1/2))`.
    Sawtooth,
    /// Folded sawtooth.
    Triangle,
    /// Fundamental plus decaying upper partials.
    Bell,
    /// Three near-unison sines beating against each other.
    Chorus,
    /// Fundamental with soft second and third harmonics.
    Rich,
    /// Decaying white noise ring-modulated by a sine at the given frequency.
    NoiseBurst,
}

impl Waveform {
    /// Returns true if the waveform draws from the RNG.
    pub fn is_random(&self) -> bool {
        matches!(self, Waveform::NoiseBurst)
    }
}

/// Sine at time `t`.
#[inline]
pub fn sine(frequency: f64, t: f64) -> f64 {
    (TWO_PI * frequency * t).sin()
}

/// Sawtooth at time `t`, in [-1, 1).
#[inline]
pub fn sawtooth(frequency: f64, t: f64) -> f64 {
    let x = frequency * t;
    2.0 * (x - (x + 0.5).floor())
}

/// Triangle at time `t`, in [-1, 1].
#[inline]
pub fn triangle(frequency: f64, t: f64) -> f64 {
    2.0 * sawtooth(frequency, t).abs() - 1.0
}

/// Bell at time `t`, normalized by the partial weights into [-1, 1].
#[inline]
pub fn bell(frequency: f64, t: f64) -> f64 {
    let total: f64 = BELL_PARTIALS.iter().map(|&(_, w, _)| w).sum();
    let sum: f64 = BELL_PARTIALS
        .iter()
        .map(|&(ratio, weight, decay)| weight * (-decay * t).exp() * sine(frequency * ratio, t))
        .sum();
    sum / total
}

/// Chorus at time `t`, in [-1, 1].
#[inline]
pub fn chorus(frequency: f64, t: f64) -> f64 {
    let center = sine(frequency, t);
    let sharp = sine(frequency * (1.0 + CHORUS_DETUNE), t);
    let flat = sine(frequency * (1.0 - CHORUS_DETUNE), t);
    (center + sharp + flat) / 3.0
}

/// Rich harmonic tone at time `t`.
#[inline]
pub fn rich(frequency: f64, t: f64) -> f64 {
    RICH_HARMONICS
        .iter()
        .map(|&(multiple, weight)| weight * sine(frequency * multiple, t))
        .sum()
}

/// Renders `duration_seconds` of `waveform` at `frequency_hz`.
///
/// Only [`Waveform::NoiseBurst`] draws from `rng`; every other waveform is a
/// pure function of its arguments.
///
/// # Errors
/// Returns an error for a non-positive sample rate, a negative or non-finite
/// duration, or a non-positive or non-finite frequency.
pub fn render_wave(
    frequency_hz: f64,
    duration_seconds: f64,
    sample_rate: f64,
    waveform: Waveform,
    rng: &mut Pcg32,
) -> AudioResult<Vec<f64>> {
    if !(sample_rate.is_finite() && sample_rate > 0.0) {
        return Err(AudioError::InvalidSampleRate { rate: sample_rate });
    }
    if !(duration_seconds.is_finite() && duration_seconds >= 0.0) {
        return Err(AudioError::InvalidDuration {
            duration: duration_seconds,
        });
    }
    if !(frequency_hz.is_finite() && frequency_hz > 0.0) {
        return Err(AudioError::InvalidFrequency { freq: frequency_hz });
    }

    let n = num_samples(duration_seconds, sample_rate);
    let mut output = Vec::with_capacity(n);

    for i in 0..n {
        let t = i as f64 / sample_rate;
        let sample = match waveform {
            Waveform::Sine => sine(frequency_hz, t),
            Waveform::Sawtooth => sawtooth(frequency_hz, t),
            Waveform::Triangle => triangle(frequency_hz, t),
            Waveform::Bell => bell(frequency_hz, t),
            Waveform::Chorus => chorus(frequency_hz, t),
            Waveform::Rich => rich(frequency_hz, t),
            Waveform::NoiseBurst => {
                let noise: f64 = rng.gen_range(-1.0..1.0);
                let decay = (-NOISE_BURST_DECAY * t / duration_seconds).exp();
                noise * sine(frequency_hz, t) * decay
            }
        };
        output.push(sample);
    }

    Ok(output)
}
