//! Length accounting of composed tracks.

use digitune_audio::length::num_samples;
use digitune_audio::theory::{map_digit, Scale, StyleConfig};
use digitune_audio::{compose, compose_with_style, Composition};
use digitune_spec::{ComposeRequest, Style, SynthConfig};
use pretty_assertions::assert_eq;

const SR: f64 = 44100.0;

fn track(digits: &str, tempo: u32, style: Style) -> Composition {
    compose(&ComposeRequest::new(digits, tempo, style), &SynthConfig::default())
        .unwrap()
        .expect("digits present")
}

/// Expected segment length: every event rounded on its own, then summed.
fn expected_segment(style: Style, digit: u8, tempo: u32) -> usize {
    let beat = 60.0 / tempo as f64;
    StyleConfig::for_style(style)
        .unwrap()
        .rhythm
        .pattern_for(digit)
        .iter()
        .map(|step| num_samples(step.beats * beat, SR))
        .sum()
}

// ============================================================================
// Segment lengths
// ============================================================================

#[test]
fn test_segment_lengths_follow_rhythm() {
    for style in Style::ALL {
        for tempo in [60, 97, 120, 211] {
            let composition = track("0123456789", tempo, style);
            let expected: Vec<usize> = (0..=9)
                .map(|d| expected_segment(style, d, tempo))
                .collect();
            assert_eq!(composition.segment_lengths, expected, "{} at {} bpm", style, tempo);
        }
    }
}

#[test]
fn test_pi_round_trip_at_120_joyful() {
    let composition = track("314159", 120, Style::Joyful);
    // 0.375 s -> 16538, 0.25 s -> 11025, 0.5 s -> 22050
    assert_eq!(composition.segment_lengths, vec![49613; 6]);
    assert_eq!(composition.dry_len, 297678);
    assert_eq!(composition.delay_samples, 15435);
    assert_eq!(composition.len(), 297678 + 15435);
}

#[test]
fn test_total_is_dry_plus_tail() {
    for style in Style::ALL {
        let composition = track("2718281828", 133, style);
        assert_eq!(
            composition.dry_len,
            composition.segment_lengths.iter().sum::<usize>()
        );
        assert_eq!(
            composition.samples.len(),
            composition.dry_len + composition.delay_samples
        );
    }
}

#[test]
fn test_echo_tail_follows_config() {
    let mut config = SynthConfig::default();
    config.echo.delay_seconds = 0.1;
    let composition = compose(&ComposeRequest::new("5", 120, Style::Holy), &config)
        .unwrap()
        .unwrap();
    assert_eq!(composition.delay_samples, 4410);
    assert_eq!(composition.len(), composition.dry_len + 4410);

    config.echo.delay_seconds = 0.0;
    let composition = compose(&ComposeRequest::new("5", 120, Style::Holy), &config)
        .unwrap()
        .unwrap();
    assert_eq!(composition.len(), composition.dry_len);
}

// ============================================================================
// Rests
// ============================================================================

#[test]
fn test_rest_takes_a_full_segment() {
    for style in Style::ALL {
        for tempo in [60, 120, 175] {
            let one = track("1", tempo, style);
            let zero = track("0", tempo, style);
            let both = track("10", tempo, style);
            assert_eq!(both.dry_len, one.dry_len + zero.dry_len, "{} at {}", style, tempo);
            assert_eq!(both.segment_lengths[1], zero.segment_lengths[0]);
            assert_eq!(zero.segment_lengths[0], track("2", tempo, style).segment_lengths[0]);
        }
    }
}

#[test]
fn test_rest_segment_is_silent_before_echo() {
    let composition = track("0000", 120, Style::Joyful);
    assert!(composition.samples.iter().all(|&s| s == 0.0));
}

#[test]
fn test_rest_between_notes_only_carries_echo() {
    let mut config = SynthConfig::default();
    config.echo.decay = 0.0;
    let composition = compose(
        &ComposeRequest::new("101", 120, Style::Classic),
        &config,
    )
    .unwrap()
    .unwrap();
    let start = composition.segment_lengths[0];
    let end = start + composition.segment_lengths[1];
    assert!(composition.samples[start..end].iter().all(|&s| s == 0.0));
}

// ============================================================================
// Empty input and digit filtering
// ============================================================================

#[test]
fn test_empty_input_is_no_audio() {
    let config = SynthConfig::default();
    for text in ["", "   ", "abc", "π≈.-"] {
        for style in Style::ALL {
            let request = ComposeRequest::new(text, 120, style);
            assert!(compose(&request, &config).unwrap().is_none(), "{:?}", text);
        }
    }
}

#[test]
fn test_non_digits_are_ignored() {
    let clean = track("314159", 150, Style::Waltz);
    let noisy = track("3.14 15-9!", 150, Style::Waltz);
    assert_eq!(clean.segment_lengths, noisy.segment_lengths);
    assert_eq!(clean.samples, noisy.samples);
}

// ============================================================================
// Scale indexing
// ============================================================================

#[test]
fn test_scale_index_is_digit_modulo_length() {
    let mut style = StyleConfig::for_style(Style::Classic).unwrap();
    let freqs: Vec<f64> = (0..12).map(|i| 200.0 + 10.0 * i as f64).collect();
    style.scale = Scale::new(freqs.clone()).unwrap();

    for digit in 1..=9u8 {
        let phrase = map_digit(digit, &style);
        assert_eq!(
            phrase.events[0].frequency,
            Some(freqs[digit as usize % 12])
        );
    }

    let request = ComposeRequest::new("987", 120, Style::Classic);
    let composition = compose_with_style(&request, &style, &SynthConfig::default())
        .unwrap()
        .unwrap();
    assert_eq!(composition.segment_lengths, vec![22050; 3]);
}
