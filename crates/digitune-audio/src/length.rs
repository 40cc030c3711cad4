//! Buffer length reconciliation.
//!
//! Durations converted to sample counts along different arithmetic paths can
//! disagree by a sample (`round(sr * (a + b))` versus
//! `round(sr * a) + round(sr * b)`). Every elementwise sum of independently
//! rendered buffers goes through [`mix_into`], which reconciles first.

/// Converts a duration to a sample count: `round(sample_rate * duration)`.
///
/// Negative and non-finite durations yield zero samples.
#[inline]
pub fn num_samples(duration_seconds: f64, sample_rate: f64) -> usize {
    let n = (duration_seconds * sample_rate).round();
    if n.is_finite() && n > 0.0 {
        n as usize
    } else {
        0
    }
}

/// Returns `buffer` truncated or zero-padded at the end to exactly `target`
/// samples.
pub fn match_length(mut buffer: Vec<f64>, target: usize) -> Vec<f64> {
    buffer.resize(target, 0.0);
    buffer
}

/// Adds `layer * gain` into `dst`, reconciling `layer` to `dst.len()` first.
pub fn mix_into(dst: &mut [f64], layer: Vec<f64>, gain: f64) {
    let layer = match_length(layer, dst.len());
    for (out, sample) in dst.iter_mut().zip(layer) {
        *out += sample * gain;
    }
}
