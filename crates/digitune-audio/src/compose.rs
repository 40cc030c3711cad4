//! Track composer.
//!
//! Renders every digit in input order, appends the mixed segments, runs one
//! echo pass over the whole track and normalizes the result.

use digitune_spec::{ComposeRequest, SynthConfig};
use tracing::{debug, trace};

use crate::effects::apply_echo;
use crate::error::AudioResult;
use crate::length::num_samples;
use crate::mixer::{mix_voices, normalize};
use crate::rng::create_segment_rng;
use crate::theory::{map_digit, StyleConfig};
use crate::voice::{render_phrase, RenderContext};

/// A finished track and the lengths it was assembled from.
#[derive(Debug, Clone)]
pub struct Composition {
    /// Normalized samples, dry track plus echo tail.
    pub samples: Vec<f64>,
    /// Length of each digit's segment, in input order.
    pub segment_lengths: Vec<usize>,
    /// Length of the dry track; the sum of `segment_lengths`.
    pub dry_len: usize,
    /// Echo delay, which is also the length of the tail.
    pub delay_samples: usize,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Gain applied by normalization.
    pub gain: f64,
}

impl Composition {
    /// Total number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the track has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Composes the track for `request` using the built-in table entry of its
/// style.
///
/// Returns `Ok(None)` if the request contains no digits.
pub fn compose(request: &ComposeRequest, config: &SynthConfig) -> AudioResult<Option<Composition>> {
    let style = StyleConfig::for_style(request.style)?;
    compose_with_style(request, &style, config)
}

/// Composes the track for `request` with an explicit style configuration.
///
/// `request.style` is ignored in favor of `style`.
///
/// # Errors
/// Fails if the request or configuration does not validate.
pub fn compose_with_style(
    request: &ComposeRequest,
    style: &StyleConfig,
    config: &SynthConfig,
) -> AudioResult<Option<Composition>> {
    request.validate()?;
    config.validate()?;

    let digits = request.digit_sequence();
    if digits.is_empty() {
        debug!("request has no digits, nothing to compose");
        return Ok(None);
    }

    let sample_rate = config.sample_rate_f64();
    let ctx = RenderContext {
        sample_rate,
        beat_seconds: request.beat_seconds(),
        envelope: &config.envelope,
    };
    let octave_factor = request.octave_factor();

    debug!(
        digits = digits.len(),
        style = %style.style,
        tempo_bpm = request.tempo_bpm,
        octave = request.octave,
        "composing track"
    );

    let mut dry = Vec::new();
    let mut segment_lengths = Vec::with_capacity(digits.len());

    for (index, digit) in digits.iter().enumerate() {
        let phrase = map_digit(digit, style).transposed(octave_factor);
        let mut rng = create_segment_rng(request.seed, index as u32);
        let voices = render_phrase(&phrase, style, &ctx, &mut rng)?;
        let segment = mix_voices(voices, &config.gains);

        trace!(index, digit, samples = segment.len(), "rendered segment");
        segment_lengths.push(segment.len());
        dry.extend(segment);
    }

    let dry_len = dry.len();
    let delay_samples = num_samples(config.echo.delay_seconds, sample_rate);
    let mut samples = apply_echo(dry, delay_samples, config.echo.decay)?;
    let gain = normalize(&mut samples, config.ceiling);

    debug!(
        dry_len,
        delay_samples,
        total = samples.len(),
        gain,
        "track composed"
    );

    Ok(Some(Composition {
        samples,
        segment_lengths,
        dry_len,
        delay_samples,
        sample_rate: config.sample_rate,
        gain,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixer::peak;
    use digitune_spec::Style;

    fn request(digits: &str, tempo: u32, style: Style) -> ComposeRequest {
        ComposeRequest::new(digits, tempo, style)
    }

    #[test]
    fn test_empty_is_none() {
        let config = SynthConfig::default();
        assert!(compose(&request("", 120, Style::Joyful), &config).unwrap().is_none());
        assert!(compose(&request("abc-.", 120, Style::Holy), &config).unwrap().is_none());
    }

    #[test]
    fn test_lengths_add_up() {
        let config = SynthConfig::default();
        let track = compose(&request("314159", 120, Style::Joyful), &config)
            .unwrap()
            .unwrap();
        assert_eq!(track.segment_lengths.len(), 6);
        assert_eq!(track.dry_len, track.segment_lengths.iter().sum::<usize>());
        assert_eq!(track.delay_samples, 15435);
        assert_eq!(track.len(), track.dry_len + track.delay_samples);
    }

    #[test]
    fn test_normalized_to_ceiling() {
        let config = SynthConfig::default();
        let track = compose(&request("271828", 150, Style::Waltz), &config)
            .unwrap()
            .unwrap();
        assert!((peak(&track.samples) - config.ceiling).abs() < 1e-9);
    }

    #[test]
    fn test_all_rests_stay_silent() {
        let config = SynthConfig::default();
        let track = compose(&request("000", 120, Style::Joyful), &config)
            .unwrap()
            .unwrap();
        assert!(track.samples.iter().all(|&s| s == 0.0));
        assert_eq!(track.gain, 1.0);
        assert_eq!(track.len(), track.dry_len + track.delay_samples);
    }

    #[test]
    fn test_invalid_request_rejected() {
        let config = SynthConfig::default();
        assert!(compose(&request("1", 0, Style::Joyful), &config).is_err());
        assert!(compose(&request("1", 120, Style::Joyful).with_octave(7), &config).is_err());
    }

    #[test]
    fn test_custom_style_overrides_request() {
        let config = SynthConfig::default();
        let classic = StyleConfig::for_style(Style::Classic).unwrap();
        let req = request("12", 60, Style::Joyful);
        let track = compose_with_style(&req, &classic, &config).unwrap().unwrap();
        assert_eq!(track.segment_lengths, vec![44100, 44100]);
    }
}
