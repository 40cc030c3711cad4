//! Tests for per-digit voice mixing.

use digitune_spec::MixGains;

use super::*;

fn gains() -> MixGains {
    MixGains {
        pad: 0.5,
        bass: 0.25,
        percussion: 0.125,
    }
}

#[test]
fn test_melody_only() {
    let voices = VoiceBuffers::melody(vec![0.5, -0.5, 0.25]);
    let output = mix_voices(voices, &gains());
    assert_eq!(output, vec![0.5, -0.5, 0.25]);
}

#[test]
fn test_gains_applied() {
    let voices = VoiceBuffers {
        melody: vec![0.0; 4],
        pad: Some(vec![1.0; 4]),
        bass: Some(vec![1.0; 4]),
        percussion: Some(vec![1.0; 4]),
    };
    let output = mix_voices(voices, &gains());
    assert_eq!(output, vec![0.875; 4]);
}

#[test]
fn test_accompaniment_reconciled_to_melody() {
    // Pad one sample long, bass one sample short, percussion far shorter.
    let voices = VoiceBuffers {
        melody: vec![0.0; 5],
        pad: Some(vec![1.0; 6]),
        bass: Some(vec![1.0; 4]),
        percussion: Some(vec![1.0; 1]),
    };
    let output = mix_voices(voices, &gains());
    assert_eq!(output.len(), 5);
    assert_eq!(output, vec![0.875, 0.75, 0.75, 0.75, 0.5]);
}

#[test]
fn test_empty_melody_yields_empty_segment() {
    let voices = VoiceBuffers {
        melody: Vec::new(),
        pad: Some(vec![1.0; 3]),
        bass: None,
        percussion: None,
    };
    assert!(mix_voices(voices, &gains()).is_empty());
}
