//! Digitune Audio Backend
//!
//! This crate turns a digit sequence into a melody and encodes it as a WAV
//! file.
//!
//! # Overview
//!
//! Each digit becomes a short phrase: a melody rhythm from the style's
//! template, pitched from the style's scale, optionally accompanied by a chord
//! pad, a bass note and a percussion texture. Digit `0` is a rest of the same
//! length as a played digit. Segments are appended in input order, a single
//! echo pass adds a tail, and the result is normalized to the configured
//! ceiling.
//!
//! - **Oscillators** - Sine, sawtooth, triangle, bell, chorus, rich tone and
//!   noise burst
//! - **Envelopes** - Percussive decay and attack/sustain/release pads
//! - **Mixing** - Length-reconciled layer sums
//!
//! # Determinism
//!
//! All synthesis is deterministic. Given the same request, configuration and
//! seed, the output is byte-identical across runs. The noise layer draws from
//! PCG32 streams seeded per digit via BLAKE3.
//!
//! # Example
//!
//! ```
//! use digitune_audio::generate;
//! use digitune_spec::{ComposeRequest, Style, SynthConfig};
//!
//! let request = ComposeRequest::new("314", 240, Style::Classic);
//! let result = generate(&request, &SynthConfig::default())
//!     .unwrap()
//!     .expect("request has digits");
//!
//! assert_eq!(&result.wav.wav_data[0..4], b"RIFF");
//! assert_eq!(result.chart, vec![3, 1, 4]);
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Main entry point: compose, encode, chart
//! - [`compose`] - Track assembly, echo and normalization
//! - [`theory`] - Scales, rhythm templates, style table, digit mapping
//! - [`voice`] - Phrase rendering into voice buffers
//! - [`oscillator`] - Waveform generators
//! - [`envelope`] - Amplitude envelopes
//! - [`length`] - Buffer length reconciliation
//! - [`mixer`] - Layer mixing and normalization
//! - [`effects`] - Echo
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`wav`] - Deterministic WAV file writer

pub mod compose;
pub mod effects;
pub mod envelope;
pub mod error;
pub mod generate;
pub mod length;
pub mod mixer;
pub mod oscillator;
pub mod rng;
pub mod theory;
pub mod voice;
pub mod wav;

// Re-export main types at crate root
pub use compose::{compose, compose_with_style, Composition};
pub use error::{AudioError, AudioResult};
pub use generate::{generate, GenerateResult};
pub use wav::WavResult;
