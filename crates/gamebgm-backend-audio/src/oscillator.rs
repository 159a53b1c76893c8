//! Additive note synthesis.
//!
//! A note is the weighted sum of four components evaluated at the same time
//! base: sine, triangle and sawtooth at the note frequency, plus a pure sine
//! at a detuned frequency mixed at a fixed weight. The sum is shaped by an
//! ADSR envelope and scaled by velocity, then added into the target buffer.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::envelope::AdsrParams;

/// 2π.
pub const TWO_PI: f64 = 2.0 * PI;

/// Weight of the detuned sine component.
pub const DETUNE_WEIGHT: f64 = 0.25;

/// Sine of a phase in radians.
#[inline]
pub fn sine(phase: f64) -> f64 {
    phase.sin()
}

/// Triangle wave in `[-1, 1]`, derived from the arcsine of the sine.
#[inline]
pub fn triangle(phase: f64) -> f64 {
    (2.0 / PI) * phase.sin().asin()
}

/// Sawtooth wave in `[-1, 1)`, the phase fraction centered on zero.
#[inline]
pub fn sawtooth(phase: f64) -> f64 {
    let cycles = phase / TWO_PI;
    2.0 * (cycles - (0.5 + cycles).floor())
}

/// Frequency ratio for a detune in cents.
#[inline]
pub fn detune_ratio(cents: f64) -> f64 {
    2.0_f64.powf(cents / 1200.0)
}

/// Oscillator weights `[sine, triangle, saw]`.
///
/// The weights are expected to sum to at most one; the detuned sine is added
/// on top at [`DETUNE_WEIGHT`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveMix(pub [f64; 3]);

impl WaveMix {
    /// Creates a wave mix.
    pub const fn new(sine: f64, triangle: f64, saw: f64) -> Self {
        Self([sine, triangle, saw])
    }

    pub fn sine(&self) -> f64 {
        self.0[0]
    }

    pub fn triangle(&self) -> f64 {
        self.0[1]
    }

    pub fn saw(&self) -> f64 {
        self.0[2]
    }

    /// Mixes the three primary waveforms at `phase`.
    #[inline]
    pub fn sample(&self, phase: f64) -> f64 {
        self.sine() * sine(phase) + self.triangle() * triangle(phase) + self.saw() * sawtooth(phase)
    }
}

/// A single note to render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteEvent {
    /// Fundamental frequency in Hz.
    pub frequency: f64,
    /// Start time in seconds.
    pub start_seconds: f64,
    /// Sounding length in seconds.
    pub duration_seconds: f64,
    /// Linear gain applied after the envelope.
    pub velocity: f64,
    pub wave_mix: WaveMix,
    /// Detune of the secondary sine in cents.
    pub detune_cents: f64,
    pub adsr: AdsrParams,
}

/// Renders `note` and adds it into `buffer`.
///
/// Sample indices cover `[floor(start * sr), floor((start + dur) * sr))`,
/// clipped to the buffer; notes starting past the end write nothing. Time
/// inside the note restarts at zero for every note.
pub fn synth_note(buffer: &mut [f64], sample_rate: u32, note: &NoteEvent) {
    let sr = sample_rate as f64;
    let start_i = (note.start_seconds * sr).floor().max(0.0) as usize;
    let end_i = (((note.start_seconds + note.duration_seconds) * sr).floor().max(0.0) as usize)
        .min(buffer.len());
    if end_i <= start_i {
        return;
    }

    let detuned = note.frequency * detune_ratio(note.detune_cents);

    for (offset, slot) in buffer[start_i..end_i].iter_mut().enumerate() {
        let t = offset as f64 / sr;
        let env = note.adsr.amplitude(t, note.duration_seconds);

        let phase1 = TWO_PI * note.frequency * t;
        let phase2 = TWO_PI * detuned * t;

        let mixed = note.wave_mix.sample(phase1) + DETUNE_WEIGHT * sine(phase2);
        *slot += mixed * env * note.velocity;
    }
}
