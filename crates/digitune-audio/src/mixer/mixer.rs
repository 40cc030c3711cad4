//! Audio mixer for combining multiple layers.

use digitune_spec::MixGains;

use crate::length::mix_into;

use super::types::{Layer, VoiceBuffers};

/// Audio mixer for combining multiple layers into a fixed-length buffer.
///
/// Each layer is reconciled to the space left after its delay before it is
/// summed, so layers of any length can be added.
#[derive(Debug)]
pub struct Mixer {
    /// Output sample length.
    num_samples: usize,
    /// Accumulated layers.
    layers: Vec<Layer>,
}

impl Mixer {
    /// Creates a new mixer producing `num_samples` samples.
    pub fn new(num_samples: usize) -> Self {
        Self {
            num_samples,
            layers: Vec::new(),
        }
    }

    /// Output length.
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Number of layers added so far.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Adds a layer to the mix.
    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Adds samples starting at sample 0.
    pub fn add_mono(&mut self, samples: Vec<f64>, volume: f64) {
        self.add_layer(Layer::new(samples, volume));
    }

    /// Mixes all layers to mono output.
    pub fn mix_mono(self) -> Vec<f64> {
        let mut output = vec![0.0; self.num_samples];

        for layer in self.layers {
            let start = layer.delay_samples.min(self.num_samples);
            mix_into(&mut output[start..], layer.samples, layer.volume);
        }

        output
    }
}

/// Mixes one digit's voices: `melody + pad * g + bass * g + percussion * g`.
///
/// The output has exactly `voices.melody.len()` samples. No normalization is
/// applied here.
pub fn mix_voices(voices: VoiceBuffers, gains: &MixGains) -> Vec<f64> {
    let mut mixer = Mixer::new(voices.len());
    mixer.add_mono(voices.melody, 1.0);

    for (layer, gain) in [
        (voices.pad, gains.pad),
        (voices.bass, gains.bass),
        (voices.percussion, gains.percussion),
    ] {
        if let Some(samples) = layer {
            mixer.add_mono(samples, gain);
        }
    }

    mixer.mix_mono()
}
