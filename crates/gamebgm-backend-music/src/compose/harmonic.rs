//! Harmonic pass: one triad pad plus four bass hits per bar.

use gamebgm_backend_audio::NoteEvent;
use serde::Serialize;

use crate::harmony::{ChordQuality, KeyContext};
use crate::note::{midi_to_freq, pitch_class_name};
use crate::preset::TimbrePreset;

/// Bass hits per bar.
pub const BASS_HITS_PER_BAR: usize = 4;

/// Bass hit length as a fraction of a beat.
pub const BASS_GATE: f64 = 0.95;

/// A triad scheduled on one bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chord {
    /// 0-based bar number.
    pub bar_index: usize,
    pub start_seconds: f64,
    /// Pad length, shortened on the last bar to end with the track.
    pub duration_seconds: f64,
    pub root_midi: u8,
    pub third_midi: u8,
    pub fifth_midi: u8,
    pub quality: ChordQuality,
    /// Scale degree of root, third and fifth.
    pub degrees: [Option<u8>; 3],
}

impl Chord {
    /// Builds the chord for `bar_index`.
    pub fn for_bar(key: &KeyContext, bar_index: usize, bar_seconds: f64, duration: f64) -> Self {
        let start_seconds = bar_index as f64 * bar_seconds;
        let root_midi = key.chord_root_for_bar(bar_index);
        let third_midi = root_midi + key.quality.third_interval();
        let fifth_midi = root_midi + 7;
        Self {
            bar_index,
            start_seconds,
            duration_seconds: bar_seconds.min(duration - start_seconds),
            root_midi,
            third_midi,
            fifth_midi,
            quality: key.quality,
            degrees: [
                key.degree_of(root_midi),
                key.degree_of(third_midi),
                key.degree_of(fifth_midi),
            ],
        }
    }

    /// Root, third and fifth.
    pub fn notes(&self) -> [u8; 3] {
        [self.root_midi, self.third_midi, self.fifth_midi]
    }

    /// Display name such as `Cmaj` or `Amin`.
    pub fn name(&self) -> String {
        format!("{}{}", pitch_class_name(self.root_midi), self.quality.suffix())
    }

    /// Bass pitch, one octave below the root.
    pub fn bass_midi(&self) -> u8 {
        self.root_midi.saturating_sub(12)
    }

    /// Sustained pad notes for this bar.
    pub fn pad_events(&self, preset: &TimbrePreset) -> [NoteEvent; 3] {
        self.notes().map(|midi| NoteEvent {
            frequency: midi_to_freq(midi),
            start_seconds: self.start_seconds,
            duration_seconds: self.duration_seconds,
            velocity: preset.pad_velocity,
            wave_mix: preset.chord.wave_mix,
            detune_cents: preset.chord.detune_cents,
            adsr: preset.chord.adsr,
        })
    }

    /// Bass hits on each beat of the bar that starts before `duration`.
    pub fn bass_events(&self, preset: &TimbrePreset, beat_seconds: f64, duration: f64) -> Vec<NoteEvent> {
        let frequency = midi_to_freq(self.bass_midi());
        (0..BASS_HITS_PER_BAR)
            .map(|b| self.start_seconds + b as f64 * beat_seconds)
            .take_while(|&start| start < duration)
            .map(|start_seconds| NoteEvent {
                frequency,
                start_seconds,
                duration_seconds: beat_seconds * BASS_GATE,
                velocity: preset.bass_velocity,
                wave_mix: preset.bass.wave_mix,
                detune_cents: preset.bass.detune_cents,
                adsr: preset.bass.adsr,
            })
            .collect()
    }
}

/// Schedules one chord per bar until the bar start reaches `duration`.
pub fn plan_chords(key: &KeyContext, bar_seconds: f64, duration: f64) -> Vec<Chord> {
    (0..)
        .map(|bar| (bar, bar as f64 * bar_seconds))
        .take_while(|&(_, start)| start < duration)
        .map(|(bar, _)| Chord::for_bar(key, bar, bar_seconds, duration))
        .collect()
}
