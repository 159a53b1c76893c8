//! ADSR envelope.
//!
//! The envelope is evaluated as a pure function of time since note start, so a
//! note can be rendered sample by sample without carrying generator state.

use serde::{Deserialize, Serialize};

/// Smallest denominator used by the envelope segments.
pub const ENVELOPE_EPSILON: f64 = 1e-9;

/// ADSR envelope parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdsrParams {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl Default for AdsrParams {
    fn default() -> Self {
        Self {
            attack: 0.01,
            decay: 0.08,
            sustain: 0.6,
            release: 0.12,
        }
    }
}

impl AdsrParams {
    /// Creates new ADSR parameters.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack: attack.max(0.0),
            decay: decay.max(0.0),
            sustain: sustain.clamp(0.0, 1.0),
            release: release.max(0.0),
        }
    }

    /// Returns a copy with the release stretched to at least `min_release`.
    pub fn with_min_release(self, min_release: f64) -> Self {
        Self {
            release: self.release.max(min_release),
            ..self
        }
    }

    /// Amplitude at `t` seconds after note start for a note lasting
    /// `note_len` seconds.
    #[inline]
    pub fn amplitude(&self, t: f64, note_len: f64) -> f64 {
        adsr_amp(
            t,
            note_len,
            self.attack,
            self.decay,
            self.sustain,
            self.release,
        )
    }
}

/// Evaluates a linear ADSR envelope.
///
/// - `t < 0`: 0
/// - attack: ramps 0 to 1 over `attack` seconds
/// - decay: ramps 1 to `sustain` over `decay` seconds
/// - sustain: holds until `t >= note_len`
/// - release: ramps `sustain` to 0 over `release` seconds, then 0
pub fn adsr_amp(t: f64, note_len: f64, attack: f64, decay: f64, sustain: f64, release: f64) -> f64 {
    if t < 0.0 {
        return 0.0;
    }
    if t < attack {
        return t / attack.max(ENVELOPE_EPSILON);
    }

    let t2 = t - attack;
    if t2 < decay {
        if decay <= ENVELOPE_EPSILON {
            return sustain;
        }
        return 1.0 - (1.0 - sustain) * (t2 / decay);
    }

    if t < note_len {
        return sustain;
    }

    let tr = t - note_len;
    if tr < release {
        return sustain * (1.0 - tr / release.max(ENVELOPE_EPSILON));
    }

    0.0
}
