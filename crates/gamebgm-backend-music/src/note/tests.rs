//! Tests for note naming and frequency conversion.

use super::*;

#[test]
fn test_midi_to_freq() {
    assert!((midi_to_freq(69) - 440.0).abs() < 0.001);
    assert!((midi_to_freq(60) - 261.626).abs() < 0.01);
    assert!((midi_to_freq(57) - 220.0).abs() < 0.001);
    assert!((midi_to_freq(45) - 110.0).abs() < 0.001);
}

#[test]
fn test_octaves_double_frequency() {
    for midi in [36u8, 48, 57, 60, 72] {
        let ratio = midi_to_freq(midi + 12) / midi_to_freq(midi);
        assert!((ratio - 2.0).abs() < 1e-9, "midi {midi}");
    }
    assert_eq!(midi_to_freq(A4_MIDI), A4_HZ);
}

#[test]
fn test_note_name() {
    assert_eq!(note_name(60), "C4");
    assert_eq!(note_name(57), "A3");
    assert_eq!(note_name(61), "C#4");
    assert_eq!(note_name(0), "C-1");
    assert_eq!(note_name(11), "B-1");
    assert_eq!(note_name(127), "G9");
}

#[test]
fn test_pitch_class_name() {
    assert_eq!(pitch_class_name(48), "C");
    assert_eq!(pitch_class_name(45), "A");
    assert_eq!(pitch_class_name(70), "A#");
}
