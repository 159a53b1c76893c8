//! Note naming and frequency conversion utilities.

mod frequency;
mod names;

#[cfg(test)]
mod tests;

pub use frequency::{midi_to_freq, A4_HZ, A4_MIDI};
pub use names::{note_name, pitch_class_name, NOTE_NAMES};
