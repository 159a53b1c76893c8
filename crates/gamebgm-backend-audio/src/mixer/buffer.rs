//! Shared sample accumulator for one synthesis run.

use crate::oscillator::{synth_note, NoteEvent};

/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44_100;

/// Mono floating-point accumulator.
///
/// Owned by exactly one synthesis run. Notes are added, never overwritten, so
/// the order in which voices are rendered does not matter beyond
/// floating-point rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f64>,
    sample_rate: u32,
}

impl SampleBuffer {
    /// Creates a silent buffer of `round(duration * SAMPLE_RATE)` samples.
    pub fn for_duration(duration_seconds: f64) -> Self {
        Self::with_sample_rate(duration_seconds, SAMPLE_RATE)
    }

    /// Creates a silent buffer at an explicit sample rate.
    pub fn with_sample_rate(duration_seconds: f64, sample_rate: u32) -> Self {
        let len = (duration_seconds.max(0.0) * sample_rate as f64).round() as usize;
        Self {
            samples: vec![0.0; len],
            sample_rate,
        }
    }

    /// Renders a note into the buffer.
    pub fn add_note(&mut self, note: &NoteEvent) {
        synth_note(&mut self.samples, self.sample_rate, note);
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [f64] {
        &mut self.samples
    }

    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Buffer length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}
