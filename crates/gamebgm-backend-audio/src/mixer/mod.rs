//! Sample accumulation and mastering.
//!
//! Voices are summed into a [`SampleBuffer`]; the finished mix is then run
//! through the mastering chain (normalize, soft clip, quantize) to produce
//! 16-bit PCM.

mod buffer;
mod processing;

#[cfg(test)]
mod tests_buffer;
#[cfg(test)]
mod tests_normalization;
#[cfg(test)]
mod tests_soft_clip;

// Re-export public API
pub use buffer::{SampleBuffer, SAMPLE_RATE};
pub use processing::{
    master_to_pcm16, normalize, peak, quantize_pcm16, soft_clip, soft_clip_buffer,
    NORMALIZE_TARGET, SILENCE_THRESHOLD,
};
