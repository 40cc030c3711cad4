//! Single-tap echo with a tail.

use crate::error::{AudioError, AudioResult};

/// Applies one echo tap to `dry`.
///
/// `out[0..len] += dry` and `out[delay..] += dry * decay`. The output is
/// `dry.len() + delay_samples` long so the echo of the final sample is kept.
///
/// # Errors
/// Returns an error if `decay` is outside [0, 1).
pub fn apply_echo(dry: Vec<f64>, delay_samples: usize, decay: f64) -> AudioResult<Vec<f64>> {
    if !(0.0..1.0).contains(&decay) {
        return Err(AudioError::invalid_param(
            "echo.decay",
            format!("must be in [0.0, 1.0), got {}", decay),
        ));
    }

    let len = dry.len();
    let mut out = dry;
    out.resize(len + delay_samples, 0.0);

    // Back to front: out[i] still holds the dry sample when its tap is added.
    for i in (0..len).rev() {
        out[i + delay_samples] += out[i] * decay;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_length_includes_tail() {
        let out = apply_echo(vec![0.5; 100], 30, 0.4).unwrap();
        assert_eq!(out.len(), 130);
    }

    #[test]
    fn test_echo_impulse_response() {
        let out = apply_echo(vec![1.0, 0.0, 0.0], 2, 0.5).unwrap();
        assert_eq!(out, vec![1.0, 0.0, 0.5, 0.0, 0.0]);
    }

    #[test]
    fn test_echo_overlap() {
        let out = apply_echo(vec![1.0, 1.0, 1.0, 1.0], 1, 0.25).unwrap();
        assert_eq!(out, vec![1.0, 1.25, 1.25, 1.25, 0.25]);
    }

    #[test]
    fn test_zero_delay_and_zero_decay() {
        let out = apply_echo(vec![0.2, -0.2], 0, 0.5).unwrap();
        assert_eq!(out.len(), 2);
        assert!((out[0] - 0.3).abs() < 1e-12);
        assert!((out[1] + 0.3).abs() < 1e-12);

        let out = apply_echo(vec![0.2, -0.2], 3, 0.0).unwrap();
        assert_eq!(out, vec![0.2, -0.2, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_matches_two_tap_sum() {
        let dry: Vec<f64> = (0..257).map(|i| ((i * 37) % 19) as f64 / 9.0 - 1.0).collect();
        for delay in [0, 1, 5, 64, 256, 300] {
            let out = apply_echo(dry.clone(), delay, 0.45).unwrap();

            let mut expected = vec![0.0; dry.len() + delay];
            for (i, &s) in dry.iter().enumerate() {
                expected[i] += s;
                expected[i + delay] += s * 0.45;
            }
            assert_eq!(out.len(), expected.len());
            for (a, b) in out.iter().zip(&expected) {
                assert!((a - b).abs() < 1e-12, "delay {}", delay);
            }
        }
    }

    #[test]
    fn test_empty_dry_signal() {
        let out = apply_echo(Vec::new(), 4, 0.3).unwrap();
        assert_eq!(out, vec![0.0; 4]);
    }

    #[test]
    fn test_invalid_decay() {
        assert!(apply_echo(vec![1.0], 1, 1.0).is_err());
        assert!(apply_echo(vec![1.0], 1, -0.1).is_err());
        assert!(apply_echo(vec![1.0], 1, f64::NAN).is_err());
    }
}
