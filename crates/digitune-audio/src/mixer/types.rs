//! Core types for audio mixing.

/// A single mono layer with mixing parameters.
#[derive(Debug, Clone)]
pub struct Layer {
    /// Audio samples.
    pub samples: Vec<f64>,
    /// Volume level (0.0 to 1.0).
    pub volume: f64,
    /// Delay in samples before this layer starts.
    pub delay_samples: usize,
}

impl Layer {
    /// Creates a new layer starting at sample 0.
    pub fn new(samples: Vec<f64>, volume: f64) -> Self {
        Self {
            samples,
            volume: volume.clamp(0.0, 1.0),
            delay_samples: 0,
        }
    }

    /// Sets a delay for the layer.
    pub fn with_delay(mut self, delay_samples: usize) -> Self {
        self.delay_samples = delay_samples;
        self
    }

    /// Sets a delay in seconds.
    pub fn with_delay_seconds(mut self, delay_seconds: f64, sample_rate: f64) -> Self {
        self.delay_samples = crate::length::num_samples(delay_seconds, sample_rate);
        self
    }
}

/// Rendered voices of one digit segment.
///
/// The melody defines the segment length; accompaniment voices are
/// reconciled to it when mixed.
#[derive(Debug, Clone, Default)]
pub struct VoiceBuffers {
    /// Lead melody, notes and rests concatenated.
    pub melody: Vec<f64>,
    /// Sustained harmony under the melody.
    pub pad: Option<Vec<f64>>,
    /// Bass line.
    pub bass: Option<Vec<f64>>,
    /// Texture/percussion layer.
    pub percussion: Option<Vec<f64>>,
}

impl VoiceBuffers {
    /// Creates voices with only a melody.
    pub fn melody(melody: Vec<f64>) -> Self {
        Self {
            melody,
            ..Self::default()
        }
    }

    /// Number of samples the mixed segment will have.
    pub fn len(&self) -> usize {
        self.melody.len()
    }

    /// Returns true if the melody is empty.
    pub fn is_empty(&self) -> bool {
        self.melody.is_empty()
    }
}
