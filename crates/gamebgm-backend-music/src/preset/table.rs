//! Static timbre and mood tables.

use gamebgm_backend_audio::{AdsrParams, WaveMix};
use gamebgm_spec::Mood;

use super::{LeadPreset, MelodyStyle};
use crate::harmony::KeyContext;

/// Voice settings stored per lead preset, before mood and style modifiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetVoices {
    pub chord_mix: WaveMix,
    pub bass_mix: WaveMix,
    pub lead_mix: WaveMix,
    pub lead_detune_cents: f64,
    pub chord_adsr: AdsrParams,
    pub bass_adsr: AdsrParams,
    pub lead_adsr: AdsrParams,
}

const fn adsr(attack: f64, decay: f64, sustain: f64, release: f64) -> AdsrParams {
    AdsrParams {
        attack,
        decay,
        sustain,
        release,
    }
}

const CHIPTUNE: PresetVoices = PresetVoices {
    chord_mix: WaveMix::new(0.2, 0.2, 0.6),
    bass_mix: WaveMix::new(0.15, 0.15, 0.7),
    lead_mix: WaveMix::new(0.1, 0.25, 0.65),
    lead_detune_cents: 1.0,
    chord_adsr: adsr(0.005, 0.05, 0.55, 0.04),
    bass_adsr: adsr(0.003, 0.04, 0.7, 0.03),
    lead_adsr: adsr(0.003, 0.06, 0.65, 0.05),
};

const STRINGS: PresetVoices = PresetVoices {
    chord_mix: WaveMix::new(0.6, 0.35, 0.05),
    bass_mix: WaveMix::new(0.75, 0.2, 0.05),
    lead_mix: WaveMix::new(0.55, 0.35, 0.1),
    lead_detune_cents: 10.0,
    chord_adsr: adsr(0.06, 0.18, 0.75, 0.25),
    bass_adsr: adsr(0.02, 0.12, 0.65, 0.18),
    lead_adsr: adsr(0.05, 0.16, 0.78, 0.28),
};

const ELECTRIC_GUITAR: PresetVoices = PresetVoices {
    chord_mix: WaveMix::new(0.25, 0.25, 0.5),
    bass_mix: WaveMix::new(0.15, 0.15, 0.7),
    lead_mix: WaveMix::new(0.15, 0.15, 0.7),
    lead_detune_cents: 6.0,
    chord_adsr: adsr(0.01, 0.09, 0.55, 0.12),
    bass_adsr: adsr(0.008, 0.08, 0.65, 0.1),
    lead_adsr: adsr(0.01, 0.1, 0.6, 0.14),
};

const FLUTE: PresetVoices = PresetVoices {
    chord_mix: WaveMix::new(0.8, 0.18, 0.02),
    bass_mix: WaveMix::new(0.85, 0.12, 0.03),
    lead_mix: WaveMix::new(0.92, 0.07, 0.01),
    lead_detune_cents: 2.0,
    chord_adsr: adsr(0.03, 0.1, 0.7, 0.18),
    bass_adsr: adsr(0.01, 0.08, 0.65, 0.12),
    lead_adsr: adsr(0.02, 0.08, 0.75, 0.16),
};

const BRASS: PresetVoices = PresetVoices {
    chord_mix: WaveMix::new(0.45, 0.25, 0.3),
    bass_mix: WaveMix::new(0.6, 0.2, 0.2),
    lead_mix: WaveMix::new(0.35, 0.25, 0.4),
    lead_detune_cents: 4.0,
    chord_adsr: adsr(0.02, 0.1, 0.7, 0.16),
    bass_adsr: adsr(0.01, 0.08, 0.7, 0.12),
    lead_adsr: adsr(0.015, 0.09, 0.75, 0.14),
};

const SYNTH_LEAD: PresetVoices = PresetVoices {
    chord_mix: WaveMix::new(0.25, 0.25, 0.5),
    bass_mix: WaveMix::new(0.3, 0.2, 0.5),
    lead_mix: WaveMix::new(0.15, 0.25, 0.6),
    lead_detune_cents: 12.0,
    chord_adsr: adsr(0.02, 0.12, 0.65, 0.2),
    bass_adsr: adsr(0.01, 0.1, 0.7, 0.18),
    lead_adsr: adsr(0.008, 0.06, 0.75, 0.12),
};

const PIANO: PresetVoices = PresetVoices {
    chord_mix: WaveMix::new(0.75, 0.2, 0.05),
    bass_mix: WaveMix::new(0.85, 0.1, 0.05),
    lead_mix: WaveMix::new(0.7, 0.25, 0.05),
    lead_detune_cents: 3.0,
    chord_adsr: adsr(0.008, 0.1, 0.55, 0.12),
    bass_adsr: adsr(0.006, 0.09, 0.6, 0.1),
    lead_adsr: adsr(0.006, 0.12, 0.5, 0.14),
};

impl PresetVoices {
    /// Looks up the table row for a lead preset.
    pub fn for_preset(preset: LeadPreset) -> Self {
        match preset {
            LeadPreset::Chiptune => CHIPTUNE,
            LeadPreset::Strings => STRINGS,
            LeadPreset::ElectricGuitar => ELECTRIC_GUITAR,
            LeadPreset::Flute => FLUTE,
            LeadPreset::Brass => BRASS,
            LeadPreset::SynthLead => SYNTH_LEAD,
            LeadPreset::Piano => PIANO,
        }
    }
}

/// Per-mood levels and melody defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodProfile {
    pub chord_detune_cents: f64,
    pub pad_velocity: f64,
    pub bass_velocity: f64,
    pub melody: MelodyStyle,
}

impl MoodProfile {
    pub fn for_mood(mood: Mood, key: &KeyContext) -> Self {
        let root = key.root_midi;
        match mood {
            Mood::Calm => Self {
                chord_detune_cents: 4.0,
                pad_velocity: 0.18,
                bass_velocity: 0.28,
                melody: MelodyStyle {
                    density: 1,
                    velocity_range: [0.35, 0.65],
                    note_lengths_beats: [1.0, 2.0],
                    pitch_range: [root + 7, root + 24],
                },
            },
            Mood::Tense => Self {
                chord_detune_cents: 8.0,
                pad_velocity: 0.22,
                bass_velocity: 0.35,
                melody: MelodyStyle {
                    density: 2,
                    velocity_range: [0.45, 0.8],
                    note_lengths_beats: [0.25, 0.5],
                    pitch_range: [root + 12, root + 31],
                },
            },
        }
    }
}
