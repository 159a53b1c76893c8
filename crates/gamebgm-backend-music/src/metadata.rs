//! Structural description of a generated piece.
//!
//! Built from the same [`Composition`] the audio is rendered from; nothing
//! here re-runs synthesis or the RNG.

use gamebgm_backend_audio::{AdsrParams, WaveMix};
use gamebgm_spec::{Mood, RequestEcho};
use serde::Serialize;

use crate::compose::{Chord, Composition, MelodyNote};
use crate::note::{note_name, pitch_class_name};
use crate::preset::{LeadPreset, TimbrePreset};

/// Metadata document emitted next to the WAV file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub seed: u32,
    pub mood: Mood,
    /// Tempo actually used, after clamping.
    pub tempo: f64,
    /// Duration actually used, after clamping.
    pub duration: f64,
    pub synth_preset: SynthPresetSummary,
    pub key: KeySummary,
    pub scale: ScaleSummary,
    pub progression: Vec<u8>,
    pub chords: Vec<ChordSummary>,
    pub melody: Vec<MelodyNoteSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<RequestEcho>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthPresetSummary {
    pub lead_preset: LeadPreset,
    pub chord_wave_mix: WaveMix,
    pub bass_wave_mix: WaveMix,
    pub lead_wave_mix: WaveMix,
    pub chord_adsr: AdsrParams,
    pub bass_adsr: AdsrParams,
    pub lead_adsr: AdsrParams,
    pub chord_detune: f64,
    pub lead_detune: f64,
    pub melody_density: u32,
    pub note_lens: [f64; 2],
}

impl From<&TimbrePreset> for SynthPresetSummary {
    fn from(preset: &TimbrePreset) -> Self {
        Self {
            lead_preset: preset.lead_preset,
            chord_wave_mix: preset.chord.wave_mix,
            bass_wave_mix: preset.bass.wave_mix,
            lead_wave_mix: preset.lead.wave_mix,
            chord_adsr: preset.chord.adsr,
            bass_adsr: preset.bass.adsr,
            lead_adsr: preset.lead.adsr,
            chord_detune: preset.chord.detune_cents,
            lead_detune: preset.lead.detune_cents,
            melody_density: preset.melody.density,
            note_lens: preset.melody.note_lengths_beats,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeySummary {
    pub root_midi: u8,
    /// Note name with octave, e.g. `C4`.
    pub name: String,
    /// Pitch class only, e.g. `C`.
    pub pitch_class: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaleSummary {
    pub pcs: Vec<u8>,
    pub names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordSummary {
    /// 1-based bar number.
    pub bar: usize,
    pub root_midi: u8,
    pub notes_midi: [u8; 3],
    pub name: String,
    pub degrees: [Option<u8>; 3],
}

impl From<&Chord> for ChordSummary {
    fn from(chord: &Chord) -> Self {
        Self {
            bar: chord.bar_index + 1,
            root_midi: chord.root_midi,
            notes_midi: chord.notes(),
            name: chord.name(),
            degrees: chord.degrees,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MelodyNoteSummary {
    pub index: usize,
    /// Start in seconds, rounded to milliseconds.
    pub start_s: f64,
    /// Length in seconds, rounded to milliseconds.
    pub dur_s: f64,
    pub midi: u8,
    pub name: String,
    pub degree: Option<u8>,
}

impl From<&MelodyNote> for MelodyNoteSummary {
    fn from(note: &MelodyNote) -> Self {
        Self {
            index: note.index,
            start_s: round_millis(note.start_seconds),
            dur_s: round_millis(note.duration_seconds),
            midi: note.midi_pitch,
            name: note_name(note.midi_pitch),
            degree: note.scale_degree,
        }
    }
}

/// Rounds seconds to three decimals.
pub fn round_millis(seconds: f64) -> f64 {
    (seconds * 1000.0).round() / 1000.0
}

/// Builds the metadata for a composition.
pub fn build_metadata(composition: &Composition) -> Metadata {
    let key = &composition.key;
    let params = &composition.params;

    Metadata {
        seed: params.seed,
        mood: params.mood,
        tempo: params.tempo_bpm,
        duration: params.duration_seconds,
        synth_preset: SynthPresetSummary::from(&composition.preset),
        key: KeySummary {
            root_midi: key.root_midi,
            name: note_name(key.root_midi),
            pitch_class: pitch_class_name(key.root_midi).to_string(),
        },
        scale: ScaleSummary {
            pcs: key.scale_pitch_classes.to_vec(),
            names: key.scale_names().into_iter().map(str::to_string).collect(),
        },
        progression: key.progression.to_vec(),
        chords: composition.chords.iter().map(ChordSummary::from).collect(),
        melody: composition
            .melody
            .iter()
            .map(MelodyNoteSummary::from)
            .collect(),
        request: None,
    }
}

impl Metadata {
    /// Attaches the descriptive request fields.
    pub fn with_request(mut self, echo: RequestEcho) -> Self {
        self.request = Some(echo);
        self
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
