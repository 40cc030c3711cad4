//! Audio processing functions for peak measurement and normalization.

/// Largest absolute sample value, or 0.0 for an empty buffer.
pub fn peak(samples: &[f64]) -> f64 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f64, |a, b| a.max(b))
}

/// Scales `samples` so the peak absolute value equals `ceiling`.
///
/// Scaled samples are clamped to `[-ceiling, ceiling]`, so rounding in the
/// gain never lifts the peak above the ceiling. Silent buffers are left
/// untouched.
///
/// # Returns
/// The gain that was applied (1.0 for silence).
pub fn normalize(samples: &mut [f64], ceiling: f64) -> f64 {
    let current_peak = peak(samples);

    if current_peak > 0.0 {
        let gain = ceiling / current_peak;
        for sample in samples.iter_mut() {
            *sample = (*sample * gain).clamp(-ceiling, ceiling);
        }
        gain
    } else {
        1.0
    }
}
