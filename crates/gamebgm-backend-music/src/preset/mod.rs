//! Timbre preset resolution.
//!
//! A [`TimbrePreset`] is resolved once per run from the mood, scene, style
//! tags, prompt and lead hint. Resolution is a fixed pipeline with no
//! randomness:
//!
//! 1. Classify the lead hint into a [`LeadHint`] and the style tags plus
//!    prompt into [`StyleFlags`].
//! 2. Pick a [`LeadPreset`] by priority: guitar/rock, strings/cinematic,
//!    flute/folk, brass, synth/electronic, chiptune, then piano.
//! 3. Load that preset's voices from the static table.
//! 4. Apply the mood profile, then scene, cinematic/ambient, rock and
//!    ambient-melody modifiers in that order.

mod classify;
mod table;


use std::fmt;

use gamebgm_backend_audio::{AdsrParams, WaveMix};
use gamebgm_spec::{Scene, SynthParameters};
use serde::Serialize;
use tracing::debug;

use crate::harmony::KeyContext;

pub use classify::{LeadHint, StyleFlags};
pub use table::{MoodProfile, PresetVoices};

/// Lead instrument family chosen for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadPreset {
    ElectricGuitar,
    Strings,
    Flute,
    Brass,
    SynthLead,
    Chiptune,
    Piano,
}

impl LeadPreset {
    /// All presets in priority order.
    pub const ALL: [LeadPreset; 7] = [
        LeadPreset::ElectricGuitar,
        LeadPreset::Strings,
        LeadPreset::Flute,
        LeadPreset::Brass,
        LeadPreset::SynthLead,
        LeadPreset::Chiptune,
        LeadPreset::Piano,
    ];

    /// Returns the wire name of this preset.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadPreset::ElectricGuitar => "electric-guitar",
            LeadPreset::Strings => "strings",
            LeadPreset::Flute => "flute",
            LeadPreset::Brass => "brass",
            LeadPreset::SynthLead => "synth-lead",
            LeadPreset::Chiptune => "chiptune",
            LeadPreset::Piano => "piano",
        }
    }

    /// Picks the preset for a classified hint and style flags.
    pub fn select(hint: Option<LeadHint>, flags: &StyleFlags) -> Self {
        let is = |h: LeadHint| hint == Some(h);
        if is(LeadHint::Guitar) || flags.rock {
            LeadPreset::ElectricGuitar
        } else if is(LeadHint::Strings) || flags.cinematic {
            LeadPreset::Strings
        } else if is(LeadHint::Woodwind) || flags.folk {
            LeadPreset::Flute
        } else if is(LeadHint::Brass) {
            LeadPreset::Brass
        } else if is(LeadHint::Synth) || flags.electronic {
            LeadPreset::SynthLead
        } else if flags.chiptune {
            LeadPreset::Chiptune
        } else {
            LeadPreset::Piano
        }
    }
}

impl fmt::Display for LeadPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Oscillator settings for one voice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoicePreset {
    pub wave_mix: WaveMix,
    pub detune_cents: f64,
    pub adsr: AdsrParams,
}

/// Melody generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MelodyStyle {
    /// Melody steps per beat.
    pub density: u32,
    /// Velocity is drawn uniformly from `[lo, hi)`.
    pub velocity_range: [f64; 2],
    /// Note lengths in beats; one is drawn per note.
    pub note_lengths_beats: [f64; 2],
    /// Inclusive MIDI range of the lead.
    pub pitch_range: [u8; 2],
}

impl MelodyStyle {
    /// Applies scene-specific rhythm and dynamics.
    pub fn with_scene(self, scene: Scene) -> Self {
        let [lo, hi] = self.velocity_range;
        if scene.is_battle_like() {
            Self {
                density: self.density.max(2),
                note_lengths_beats: [0.25, 0.5],
                velocity_range: [lo.max(0.5), (hi + 0.1).min(0.9)],
                ..self
            }
        } else if scene.is_town_like() {
            Self {
                density: 1,
                note_lengths_beats: [1.0, 2.0],
                velocity_range: [0.25, 0.55],
                ..self
            }
        } else if scene.is_puzzle_like() {
            Self {
                density: 1,
                note_lengths_beats: [0.5, 1.0],
                velocity_range: [0.3, 0.6],
                ..self
            }
        } else {
            self
        }
    }

    /// Sparse, long-note melody for ambient styles.
    pub fn ambient(self) -> Self {
        Self {
            density: 1,
            note_lengths_beats: [2.0, 4.0],
            velocity_range: [0.25, 0.55],
            ..self
        }
    }
}

/// Fully resolved timbre for a run. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimbrePreset {
    pub lead_preset: LeadPreset,
    pub chord: VoicePreset,
    pub bass: VoicePreset,
    pub lead: VoicePreset,
    pub melody: MelodyStyle,
    pub pad_velocity: f64,
    pub bass_velocity: f64,
}

/// Resolves the timbre preset for a parameter set.
pub fn resolve_preset(params: &SynthParameters) -> TimbrePreset {
    let hint = params
        .lead_instrument_hint
        .as_deref()
        .and_then(LeadHint::classify);
    let flags = StyleFlags::from_params(params);
    let lead_preset = LeadPreset::select(hint, &flags);

    let key = KeyContext::for_mood(params.mood);
    let profile = MoodProfile::for_mood(params.mood, &key);
    let voices = PresetVoices::for_preset(lead_preset);

    let mut melody = profile.melody;
    if let Some(scene) = params.scene {
        melody = melody.with_scene(scene);
    }

    let mut chord = VoicePreset {
        wave_mix: voices.chord_mix,
        detune_cents: profile.chord_detune_cents,
        adsr: voices.chord_adsr,
    };
    let mut bass = VoicePreset {
        wave_mix: voices.bass_mix,
        detune_cents: 0.0,
        adsr: voices.bass_adsr,
    };
    let mut lead = VoicePreset {
        wave_mix: voices.lead_mix,
        detune_cents: voices.lead_detune_cents,
        adsr: voices.lead_adsr,
    };

    if flags.cinematic || flags.ambient {
        chord.adsr = AdsrParams {
            sustain: (chord.adsr.sustain + 0.1).min(0.85),
            ..chord.adsr.with_min_release(0.22)
        };
        lead.adsr = lead.adsr.with_min_release(0.22);
        chord.detune_cents = chord.detune_cents.max(8.0);
    }

    if flags.rock {
        lead.wave_mix = WaveMix::new(0.1, 0.1, 0.8);
        bass.wave_mix = WaveMix::new(0.1, 0.1, 0.8);
        lead.detune_cents = lead.detune_cents.max(10.0);
    }

    if flags.ambient {
        melody = melody.ambient();
    }

    debug!(
        lead_preset = %lead_preset,
        ?hint,
        ?flags,
        scene = ?params.scene,
        density = melody.density,
        "resolved timbre preset"
    );

    TimbrePreset {
        lead_preset,
        chord,
        bass,
        lead,
        melody,
        pad_velocity: profile.pad_velocity,
        bass_velocity: profile.bass_velocity,
    }
}
