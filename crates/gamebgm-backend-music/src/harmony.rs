//! Scales, chord progressions and key selection by mood.

use gamebgm_spec::Mood;
use serde::{Deserialize, Serialize};

use crate::note::pitch_class_name;

/// Major scale pitch classes.
pub const MAJOR_SCALE: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];
/// Natural minor scale pitch classes.
pub const MINOR_SCALE: [u8; 7] = [0, 2, 3, 5, 7, 8, 10];

/// I - V - vi - IV, as semitone offsets from the chord root.
pub const CALM_PROGRESSION: [u8; 4] = [0, 7, 9, 5];
/// i - VI - III - VII, as semitone offsets from the chord root.
pub const TENSE_PROGRESSION: [u8; 4] = [0, 8, 3, 10];

/// Returns the scale used for a mood.
pub fn scale_for(mood: Mood) -> [u8; 7] {
    match mood {
        Mood::Calm => MAJOR_SCALE,
        Mood::Tense => MINOR_SCALE,
    }
}

/// Returns the chord progression used for a mood. Applied cyclically per bar.
pub fn progression_for(mood: Mood) -> [u8; 4] {
    match mood {
        Mood::Calm => CALM_PROGRESSION,
        Mood::Tense => TENSE_PROGRESSION,
    }
}

/// 1-based position of `midi`'s pitch class within `scale`, relative to
/// `key_root`. `None` if the pitch class is outside the scale.
pub fn degree_in_scale(midi: u8, key_root: u8, scale: &[u8]) -> Option<u8> {
    let pc = (midi as i32 - key_root as i32).rem_euclid(12) as u8;
    scale
        .iter()
        .position(|&s| s == pc)
        .map(|idx| idx as u8 + 1)
}

/// Triad quality used for every chord of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordQuality {
    Major,
    Minor,
}

impl ChordQuality {
    /// Semitones from root to third.
    pub fn third_interval(&self) -> u8 {
        match self {
            ChordQuality::Major => 4,
            ChordQuality::Minor => 3,
        }
    }

    /// Suffix used in chord names (`Cmaj`, `Amin`).
    pub fn suffix(&self) -> &'static str {
        match self {
            ChordQuality::Major => "maj",
            ChordQuality::Minor => "min",
        }
    }
}

/// Key, scale and progression for one run. Fixed per mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyContext {
    /// Key root used for the melody and for scale degrees.
    pub root_midi: u8,
    /// Root of the first chord of the progression, one octave below the key.
    pub chord_root_midi: u8,
    pub quality: ChordQuality,
    pub scale_pitch_classes: [u8; 7],
    pub progression: [u8; 4],
}

impl KeyContext {
    /// C major around C4 for calm, A minor around A3 for tense.
    pub fn for_mood(mood: Mood) -> Self {
        let (root_midi, chord_root_midi, quality) = match mood {
            Mood::Calm => (60, 48, ChordQuality::Major),
            Mood::Tense => (57, 45, ChordQuality::Minor),
        };
        Self {
            root_midi,
            chord_root_midi,
            quality,
            scale_pitch_classes: scale_for(mood),
            progression: progression_for(mood),
        }
    }

    /// Chord root for a bar, cycling through the progression.
    pub fn chord_root_for_bar(&self, bar_index: usize) -> u8 {
        self.chord_root_midi + self.progression[bar_index % self.progression.len()]
    }

    /// Scale degree of a pitch in this key.
    pub fn degree_of(&self, midi: u8) -> Option<u8> {
        degree_in_scale(midi, self.root_midi, &self.scale_pitch_classes)
    }

    /// Names of the scale tones starting from the key root.
    pub fn scale_names(&self) -> Vec<&'static str> {
        self.scale_pitch_classes
            .iter()
            .map(|&pc| pitch_class_name(self.root_midi + pc))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scale_for() {
        assert_eq!(scale_for(Mood::Calm), [0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(scale_for(Mood::Tense), [0, 2, 3, 5, 7, 8, 10]);
    }

    #[test]
    fn test_progression_for() {
        assert_eq!(progression_for(Mood::Calm), [0, 7, 9, 5]);
        assert_eq!(progression_for(Mood::Tense), [0, 8, 3, 10]);
    }

    #[test]
    fn test_degree_in_scale() {
        assert_eq!(degree_in_scale(60, 60, &MAJOR_SCALE), Some(1));
        assert_eq!(degree_in_scale(67, 60, &MAJOR_SCALE), Some(5));
        assert_eq!(degree_in_scale(83, 60, &MAJOR_SCALE), Some(7));
        assert_eq!(degree_in_scale(61, 60, &MAJOR_SCALE), None);
        // Below the key root wraps around the octave.
        assert_eq!(degree_in_scale(48, 60, &MAJOR_SCALE), Some(1));
        assert_eq!(degree_in_scale(59, 60, &MAJOR_SCALE), Some(7));
    }

    #[test]
    fn test_degree_in_minor_key() {
        let key = KeyContext::for_mood(Mood::Tense);
        assert_eq!(key.degree_of(57), Some(1)); // A
        assert_eq!(key.degree_of(60), Some(3)); // C
        assert_eq!(key.degree_of(65), Some(6)); // F
        assert_eq!(key.degree_of(61), None); // C#
    }

    #[test]
    fn test_key_context_calm() {
        let key = KeyContext::for_mood(Mood::Calm);
        assert_eq!(key.root_midi, 60);
        assert_eq!(key.chord_root_midi, 48);
        assert_eq!(key.quality, ChordQuality::Major);
        assert_eq!(key.scale_names(), vec!["C", "D", "E", "F", "G", "A", "B"]);
    }

    #[test]
    fn test_key_context_tense() {
        let key = KeyContext::for_mood(Mood::Tense);
        assert_eq!(key.root_midi, 57);
        assert_eq!(key.chord_root_midi, 45);
        assert_eq!(key.scale_names(), vec!["A", "B", "C", "D", "E", "F", "G"]);
    }

    #[test]
    fn test_chord_root_cycles() {
        let key = KeyContext::for_mood(Mood::Calm);
        let roots: Vec<u8> = (0..6).map(|bar| key.chord_root_for_bar(bar)).collect();
        assert_eq!(roots, vec![48, 55, 57, 53, 48, 55]);
    }

    #[test]
    fn test_chord_quality() {
        assert_eq!(ChordQuality::Major.third_interval(), 4);
        assert_eq!(ChordQuality::Minor.third_interval(), 3);
        assert_eq!(ChordQuality::Major.suffix(), "maj");
        assert_eq!(ChordQuality::Minor.suffix(), "min");
    }
}
