//! Basic tests for Mixer construction and layer management.

use super::*;

#[test]
fn test_mixer_new() {
    let mixer = Mixer::new(1000);
    assert_eq!(mixer.num_samples(), 1000);
    assert_eq!(mixer.num_layers(), 0);
}

#[test]
fn test_empty_mixer() {
    let mixer = Mixer::new(0);
    let output = mixer.mix_mono();
    assert!(output.is_empty());
}

#[test]
fn test_zero_volume_layer() {
    let mut mixer = Mixer::new(100);
    mixer.add_mono(vec![1.0; 100], 0.0);

    let output = mixer.mix_mono();
    assert!(output.iter().all(|&s| s == 0.0));
}

#[test]
fn test_volume_is_clamped() {
    let layer = Layer::new(vec![1.0], 3.0);
    assert_eq!(layer.volume, 1.0);
    let layer = Layer::new(vec![1.0], -1.0);
    assert_eq!(layer.volume, 0.0);
}

#[test]
fn test_shorter_layer_is_zero_padded() {
    let mut mixer = Mixer::new(6);
    mixer.add_mono(vec![1.0; 6], 1.0);
    mixer.add_mono(vec![1.0; 4], 0.5);

    let output = mixer.mix_mono();
    assert_eq!(output, vec![1.5, 1.5, 1.5, 1.5, 1.0, 1.0]);
}

#[test]
fn test_longer_layer_is_truncated() {
    let mut mixer = Mixer::new(3);
    mixer.add_mono(vec![0.25; 10], 1.0);

    let output = mixer.mix_mono();
    assert_eq!(output, vec![0.25; 3]);
}

#[test]
fn test_delayed_layer() {
    let mut mixer = Mixer::new(6);
    mixer.add_mono(vec![1.0, 1.0, 1.0, 1.0], 1.0);
    mixer.add_layer(Layer::new(vec![1.0, 1.0, 1.0, 1.0], 0.5).with_delay(2));

    let output = mixer.mix_mono();
    assert_eq!(output, vec![1.0, 1.0, 1.5, 1.5, 0.5, 0.5]);
}

#[test]
fn test_delay_past_end_is_ignored() {
    let mut mixer = Mixer::new(4);
    mixer.add_layer(Layer::new(vec![1.0; 4], 1.0).with_delay(10));

    let output = mixer.mix_mono();
    assert_eq!(output, vec![0.0; 4]);
}

#[test]
fn test_delay_seconds() {
    let layer = Layer::new(vec![0.0], 1.0).with_delay_seconds(0.5, 44100.0);
    assert_eq!(layer.delay_samples, 22050);
}
