//! Chromatic note names.

/// Sharp-spelled names of the twelve pitch classes, starting at C.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Name of a MIDI note with octave, e.g. `60 -> "C4"`.
///
/// The octave is `floor(midi / 12) - 1`.
pub fn note_name(midi: u8) -> String {
    let octave = (midi / 12) as i32 - 1;
    format!("{}{}", pitch_class_name(midi), octave)
}

/// Pitch-class name of a MIDI note without octave, e.g. `57 -> "A"`.
pub fn pitch_class_name(midi: u8) -> &'static str {
    NOTE_NAMES[(midi % 12) as usize]
}
