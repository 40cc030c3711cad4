//! Layer and voice mixing.
//!
//! This module combines rendered voices into one mono buffer. Layers are
//! always length-reconciled before summation.

#[allow(clippy::module_inception)]
mod mixer;
mod processing;
mod types;

#[cfg(test)]
mod tests_mixer_basic;
#[cfg(test)]
mod tests_normalization;
#[cfg(test)]
mod tests_voices;

// Re-export public API
pub use mixer::{mix_voices, Mixer};
pub use processing::{normalize, peak};
pub use types::{Layer, VoiceBuffers};
