//! Digitune Request Library
//!
//! This crate provides the types shared by the Digitune synthesis backend and
//! its callers: the composition request, the musical style selector, the
//! perceptual tuning configuration, digit filtering and the built-in constant
//! presets.
//!
//! # Example
//!
//! ```
//! use digitune_spec::{ComposeRequest, DigitSequence, Style, SynthConfig};
//!
//! let request = ComposeRequest::new("3.14159", 120, Style::Joyful);
//! assert!(request.validate().is_ok());
//! assert!(SynthConfig::default().validate().is_ok());
//!
//! let digits = DigitSequence::parse(&request.digits);
//! assert_eq!(digits.as_slice(), &[3, 1, 4, 1, 5, 9]);
//! ```
//!
//! # Modules
//!
//! - [`config`]: Perceptual tuning constants (gains, echo, ceiling, envelopes)
//! - [`digits`]: Digit filtering and chart extraction
//! - [`error`]: Error codes, validation errors and the backend error trait
//! - [`preset`]: Mathematical constant presets
//! - [`request`]: The composition request
//! - [`style`]: Musical style selector

pub mod config;
pub mod digits;
pub mod error;
pub mod preset;
pub mod request;
pub mod style;

// Re-export commonly used types at the crate root
pub use config::{
    EchoConfig, EnvelopeConfig, MixGains, SynthConfig, DEFAULT_SAMPLE_RATE, MAX_SAMPLE_RATE,
};
pub use digits::{DigitSequence, CHART_LIMIT};
pub use error::{BackendError, ErrorCode, SpecError, ValidationError};
pub use preset::Preset;
pub use request::{ComposeRequest, DEFAULT_OCTAVE, MAX_OCTAVE, MAX_TEMPO_BPM, MIN_OCTAVE};
pub use style::Style;
