//! Perceptual tuning constants for synthesis.
//!
//! None of these values are structural: they change how a track sounds, not
//! its timing. Defaults sit inside the ranges that sound balanced for every
//! built-in style.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, SpecError, ValidationError};

/// Output sample rate used unless configured otherwise.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Highest accepted sample rate in Hz.
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// Per-voice gains applied under the lead melody.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct MixGains {
    /// Pad/harmony gain.
    pub pad: f64,
    /// Bass gain.
    pub bass: f64,
    /// Percussion gain.
    pub percussion: f64,
}

impl Default for MixGains {
    fn default() -> Self {
        Self {
            pad: 0.35,
            bass: 0.55,
            percussion: 0.3,
        }
    }
}

/// Single-tap echo applied to the whole track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct EchoConfig {
    /// Delay of the echo tap in seconds.
    pub delay_seconds: f64,
    /// Gain of the echo tap relative to the dry signal.
    pub decay: f64,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            delay_seconds: 0.35,
            decay: 0.4,
        }
    }
}

/// Envelope shape constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct EnvelopeConfig {
    /// Decay constant `k` of the percussive envelope `exp(-k * t)`, with `t`
    /// running from 0 to 1 across the note.
    pub percussive_decay: f64,
    /// Fraction of a pad note spent in the attack ramp.
    pub attack_fraction: f64,
    /// Fraction of a pad note spent at full level.
    pub sustain_fraction: f64,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            percussive_decay: 4.0,
            attack_fraction: 0.2,
            sustain_fraction: 0.5,
        }
    }
}

/// Synthesis configuration shared by every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SynthConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Accompaniment gains.
    pub gains: MixGains,
    /// Track echo.
    pub echo: EchoConfig,
    /// Envelope constants.
    pub envelope: EnvelopeConfig,
    /// Peak level after normalization.
    pub ceiling: f64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            gains: MixGains::default(),
            echo: EchoConfig::default(),
            envelope: EnvelopeConfig::default(),
            ceiling: 0.9,
        }
    }
}

impl SynthConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SpecError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Sample rate as a float, for time arithmetic.
    pub fn sample_rate_f64(&self) -> f64 {
        self.sample_rate as f64
    }

    /// Validates every field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sample_rate == 0 || self.sample_rate > MAX_SAMPLE_RATE {
            return Err(ValidationError::with_path(
                ErrorCode::InvalidSampleRate,
                format!("must be 1-{}, got {}", MAX_SAMPLE_RATE, self.sample_rate),
                "sample_rate",
            ));
        }

        for (name, gain) in [
            ("gains.pad", self.gains.pad),
            ("gains.bass", self.gains.bass),
            ("gains.percussion", self.gains.percussion),
        ] {
            if !(0.0..=1.0).contains(&gain) {
                return Err(ValidationError::with_path(
                    ErrorCode::InvalidGain,
                    format!("must be 0.0-1.0, got {}", gain),
                    name,
                ));
            }
        }

        if !(0.0..=2.0).contains(&self.echo.delay_seconds) {
            return Err(ValidationError::with_path(
                ErrorCode::InvalidEcho,
                format!("must be 0.0-2.0, got {}", self.echo.delay_seconds),
                "echo.delay_seconds",
            ));
        }
        if !(0.0..1.0).contains(&self.echo.decay) {
            return Err(ValidationError::with_path(
                ErrorCode::InvalidEcho,
                format!("must be in [0.0, 1.0), got {}", self.echo.decay),
                "echo.decay",
            ));
        }

        if !(self.ceiling > 0.0 && self.ceiling <= 1.0) {
            return Err(ValidationError::with_path(
                ErrorCode::InvalidCeiling,
                format!("must be in (0.0, 1.0], got {}", self.ceiling),
                "ceiling",
            ));
        }

        let env = &self.envelope;
        if !(env.percussive_decay.is_finite() && env.percussive_decay >= 0.0) {
            return Err(ValidationError::with_path(
                ErrorCode::InvalidEnvelope,
                format!("must be a finite value >= 0, got {}", env.percussive_decay),
                "envelope.percussive_decay",
            ));
        }
        if !(0.0..=1.0).contains(&env.attack_fraction)
            || !(0.0..=1.0).contains(&env.sustain_fraction)
            || env.attack_fraction + env.sustain_fraction > 1.0
        {
            return Err(ValidationError::with_path(
                ErrorCode::InvalidEnvelope,
                format!(
                    "attack ({}) and sustain ({}) fractions must each be 0.0-1.0 and sum to at most 1.0",
                    env.attack_fraction, env.sustain_fraction
                ),
                "envelope",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_is_valid() {
        let config = SynthConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sample_rate, 44100);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SynthConfig::from_json(r#"{"ceiling": 0.95, "gains": {"pad": 0.4}}"#).unwrap();
        assert_eq!(config.ceiling, 0.95);
        assert_eq!(config.gains.pad, 0.4);
        assert_eq!(config.gains.bass, MixGains::default().bass);
        assert_eq!(config.echo, EchoConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(SynthConfig::from_json(r#"{"reverb": 1}"#).is_err());
    }

    #[test]
    fn test_invalid_gain() {
        let mut config = SynthConfig::default();
        config.gains.bass = 1.5;
        let err = config.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidGain);
        assert_eq!(err.path.as_deref(), Some("gains.bass"));
    }

    #[test]
    fn test_invalid_echo_decay() {
        let mut config = SynthConfig::default();
        config.echo.decay = 1.0;
        assert_eq!(config.validate().unwrap_err().code, ErrorCode::InvalidEcho);
    }

    #[test]
    fn test_invalid_ceiling() {
        for ceiling in [0.0, -0.5, 1.01, f64::NAN] {
            let config = SynthConfig {
                ceiling,
                ..SynthConfig::default()
            };
            assert_eq!(
                config.validate().unwrap_err().code,
                ErrorCode::InvalidCeiling,
                "ceiling {} should be rejected",
                ceiling
            );
        }
    }

    #[test]
    fn test_invalid_envelope_fractions() {
        let mut config = SynthConfig::default();
        config.envelope.attack_fraction = 0.7;
        config.envelope.sustain_fraction = 0.6;
        assert_eq!(
            config.validate().unwrap_err().code,
            ErrorCode::InvalidEnvelope
        );
    }

    #[test]
    fn test_zero_sample_rate() {
        let config = SynthConfig {
            sample_rate: 0,
            ..SynthConfig::default()
        };
        assert_eq!(
            config.validate().unwrap_err().code,
            ErrorCode::InvalidSampleRate
        );
    }

    #[test]
    fn test_sample_rate_upper_bound() {
        let at_limit = SynthConfig {
            sample_rate: MAX_SAMPLE_RATE,
            ..SynthConfig::default()
        };
        assert!(at_limit.validate().is_ok());

        for rate in [MAX_SAMPLE_RATE + 1, 3_000_000_000] {
            let config = SynthConfig {
                sample_rate: rate,
                ..SynthConfig::default()
            };
            let err = config.validate().unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidSampleRate);
            assert_eq!(err.path.as_deref(), Some("sample_rate"));
        }
    }
}
