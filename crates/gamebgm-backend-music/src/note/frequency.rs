//! MIDI pitch to frequency.

/// Reference pitch for MIDI note 69 (A4).
pub const A4_HZ: f64 = 440.0;

/// MIDI note of [`A4_HZ`].
pub const A4_MIDI: u8 = 69;

/// Equal-tempered frequency of a MIDI note, in Hz.
///
/// ```
/// use gamebgm_backend_music::note::midi_to_freq;
///
/// assert!((midi_to_freq(57) - 220.0).abs() < 1e-9);
/// assert!((midi_to_freq(48) - 130.813).abs() < 0.001);
/// ```
pub fn midi_to_freq(midi: u8) -> f64 {
    A4_HZ * 2.0_f64.powf((midi as f64 - A4_MIDI as f64) / 12.0)
}
