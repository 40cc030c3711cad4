//! Tests for peak measurement and normalization.

use super::*;

#[test]
fn test_peak() {
    assert_eq!(peak(&[0.1, -0.7, 0.3]), 0.7);
    assert_eq!(peak(&[]), 0.0);
}

#[test]
fn test_normalize_basic() {
    let mut samples = vec![0.5, -0.3, 0.8, -0.2];
    normalize(&mut samples, 0.9);

    assert!((peak(&samples) - 0.9).abs() < 1e-12);
}

#[test]
fn test_normalize_silent_audio() {
    let mut samples = vec![0.0, 0.0, 0.0, 0.0];
    let gain = normalize(&mut samples, 0.9);

    // Silent audio should remain silent (no division by zero)
    assert_eq!(gain, 1.0);
    assert!(samples.iter().all(|&s| s == 0.0));
}

#[test]
fn test_normalize_loud_audio() {
    let mut samples = vec![2.0, -1.5, 3.0, -2.5];
    let gain = normalize(&mut samples, 0.95);

    assert!((gain - 0.95 / 3.0).abs() < 1e-12);
    assert!((peak(&samples) - 0.95).abs() < 1e-12);
}

#[test]
fn test_normalize_negative_peak() {
    let mut samples = vec![0.1, -0.4];
    normalize(&mut samples, 0.8);

    assert!((samples[1] + 0.8).abs() < 1e-12);
}

#[test]
fn test_normalize_preserves_relative_amplitudes() {
    let mut samples = vec![1.0, 0.5, 0.25];
    normalize(&mut samples, 0.9);

    // Ratios should be preserved
    assert!((samples[1] / samples[0] - 0.5).abs() < 0.001);
    assert!((samples[2] / samples[0] - 0.25).abs() < 0.001);
}

#[test]
fn test_normalize_never_exceeds_ceiling() {
    // Each of these peaks times 0.9 / peak rounds one ulp above 0.9.
    for current_peak in [1.491351, 0.700291, 0.371461] {
        let mut samples = vec![0.1, current_peak, -current_peak, -0.05];
        normalize(&mut samples, 0.9);

        assert!(peak(&samples) <= 0.9, "peak {} overshoots", peak(&samples));
        assert!((peak(&samples) - 0.9).abs() < 1e-12);
        assert_eq!(samples[1], -samples[2]);
    }
}
