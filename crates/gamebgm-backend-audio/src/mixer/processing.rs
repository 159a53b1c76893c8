//! Mastering: normalization, soft clipping and 16-bit quantization.

/// Peak level the mix is scaled to before soft clipping.
pub const NORMALIZE_TARGET: f64 = 0.9;

/// Peaks below this are treated as silence and left unscaled.
pub const SILENCE_THRESHOLD: f64 = 1e-9;

/// Returns the largest absolute sample value.
pub fn peak(samples: &[f64]) -> f64 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f64, |a, b| a.max(b))
}

/// Scales samples so the peak lands on `target`.
///
/// A silent buffer (peak below [`SILENCE_THRESHOLD`]) is treated as having a
/// peak of 1, so near-zero noise is never blown up.
///
/// # Returns
/// The gain that was applied.
pub fn normalize(samples: &mut [f64], target: f64) -> f64 {
    let mut current_peak = peak(samples);
    if current_peak < SILENCE_THRESHOLD {
        current_peak = 1.0;
    }

    let gain = target / current_peak;
    for sample in samples.iter_mut() {
        *sample *= gain;
    }
    gain
}

/// Applies `tanh` soft clipping.
#[inline]
pub fn soft_clip(sample: f64) -> f64 {
    sample.tanh()
}

/// Applies soft clipping to a buffer.
pub fn soft_clip_buffer(samples: &mut [f64]) {
    for sample in samples.iter_mut() {
        *sample = soft_clip(*sample);
    }
}

/// Converts samples to signed 16-bit values.
///
/// Samples are clamped to `[-1, 1]` and scaled by 32767 with rounding, so the
/// result always fits in `i16`.
pub fn quantize_pcm16(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * 32767.0).round() as i16)
        .collect()
}

/// Runs the full mastering chain on a mix without modifying it.
///
/// peak scan, gain to [`NORMALIZE_TARGET`], `tanh`, clamp, quantize.
pub fn master_to_pcm16(samples: &[f64]) -> Vec<i16> {
    let mut mastered = samples.to_vec();
    normalize(&mut mastered, NORMALIZE_TARGET);
    soft_clip_buffer(&mut mastered);
    quantize_pcm16(&mastered)
}
