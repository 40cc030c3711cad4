//! One-call generation: compose, encode, and extract the chart sequence.

use digitune_spec::{ComposeRequest, SynthConfig};
use tracing::info;

use crate::compose::{compose, Composition};
use crate::error::AudioResult;
use crate::wav::WavResult;

/// Output of [`generate`].
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Encoded WAV file.
    pub wav: WavResult,
    /// Non-zero digits for charting, capped at [`digitune_spec::CHART_LIMIT`].
    pub chart: Vec<u8>,
    /// Number of digits rendered.
    pub num_digits: usize,
    /// Length of the dry track in samples.
    pub dry_len: usize,
    /// Length of the echo tail in samples.
    pub tail_len: usize,
}

impl GenerateResult {
    fn new(composition: Composition, chart: Vec<u8>) -> AudioResult<Self> {
        let wav = WavResult::from_mono(&composition.samples, composition.sample_rate)?;
        Ok(Self {
            wav,
            chart,
            num_digits: composition.segment_lengths.len(),
            dry_len: composition.dry_len,
            tail_len: composition.delay_samples,
        })
    }
}

/// Generates the WAV file for `request`.
///
/// Returns `Ok(None)` ("no audio") if the request contains no digits.
///
/// # Errors
/// Fails if the request or configuration does not validate, or if the
/// rendered track is too long for a WAV header.
pub fn generate(request: &ComposeRequest, config: &SynthConfig) -> AudioResult<Option<GenerateResult>> {
    let Some(composition) = compose(request, config)? else {
        return Ok(None);
    };

    let chart = request.digit_sequence().chart_values();
    let result = GenerateResult::new(composition, chart)?;

    info!(
        digits = result.num_digits,
        samples = result.wav.num_samples,
        pcm_hash = %result.wav.pcm_hash,
        "generated audio"
    );

    Ok(Some(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AudioError;
    use digitune_spec::{BackendError, ErrorCode, SpecError, Style};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generate_returns_wav_and_chart() {
        let request = ComposeRequest::new("3.14159-0", 240, Style::Classic);
        let result = generate(&request, &SynthConfig::default()).unwrap().unwrap();
        assert_eq!(result.chart, vec![3, 1, 4, 1, 5, 9]);
        assert_eq!(result.num_digits, 7);
        assert_eq!(result.wav.num_samples, result.dry_len + result.tail_len);
        assert_eq!(&result.wav.wav_data[0..4], b"RIFF");
    }

    #[test]
    fn test_generate_empty_is_none() {
        let request = ComposeRequest::new("no digits here", 120, Style::Joyful);
        assert!(generate(&request, &SynthConfig::default()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SynthConfig {
            ceiling: 1.5,
            ..SynthConfig::default()
        };
        let request = ComposeRequest::new("1", 120, Style::Joyful);
        assert!(generate(&request, &config).is_err());
    }

    #[test]
    fn test_huge_sample_rate_rejected() {
        let config = SynthConfig {
            sample_rate: 3_000_000_000,
            ..SynthConfig::default()
        };
        let request = ComposeRequest::new("1", 120, Style::Classic);
        let err = generate(&request, &config).unwrap_err();
        assert_eq!(err.code(), "SPEC_001");
        assert!(matches!(
            err,
            AudioError::Spec(SpecError::Invalid(ref v)) if v.code == ErrorCode::InvalidSampleRate
        ));
    }
}
