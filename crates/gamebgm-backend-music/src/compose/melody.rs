//! Melody pass: random diatonic lead line driven by the seeded RNG.

use gamebgm_backend_audio::{Draws, NoteEvent};
use gamebgm_spec::Mood;
use serde::Serialize;
use tracing::warn;

use crate::harmony::KeyContext;
use crate::note::midi_to_freq;
use crate::preset::{MelodyStyle, VoicePreset};

/// One lead note.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MelodyNote {
    pub index: usize,
    pub start_seconds: f64,
    pub duration_seconds: f64,
    pub midi_pitch: u8,
    pub velocity: f64,
    pub scale_degree: Option<u8>,
}

impl MelodyNote {
    /// End time in seconds.
    pub fn end_seconds(&self) -> f64 {
        self.start_seconds + self.duration_seconds
    }

    /// Note event rendered with the lead voice.
    pub fn event(&self, lead: &VoicePreset) -> NoteEvent {
        NoteEvent {
            frequency: midi_to_freq(self.midi_pitch),
            start_seconds: self.start_seconds,
            duration_seconds: self.duration_seconds,
            velocity: self.velocity,
            wave_mix: lead.wave_mix,
            detune_cents: lead.detune_cents,
            adsr: lead.adsr,
        }
    }
}

/// Candidate lead pitches: every scale tone in the key octave and the one
/// above, interleaved per scale step, limited to the lead range.
///
/// The order matters: pitches are drawn by index.
pub fn pitch_pool(key: &KeyContext, style: &MelodyStyle) -> Vec<u8> {
    let [lo, hi] = style.pitch_range;
    key.scale_pitch_classes
        .iter()
        .flat_map(|&pc| [key.root_midi + pc, key.root_midi + 12 + pc])
        .filter(|&p| (lo..=hi).contains(&p))
        .collect()
}

/// Generates the melody.
///
/// Each step draws, in order, a pitch, a velocity and a length from `rng`.
/// Calm melodies advance by the sounding length and then rest for one step
/// half of the time (one extra draw); tense melodies advance by one step.
pub fn plan_melody(
    rng: &mut impl Draws,
    key: &KeyContext,
    mood: Mood,
    style: &MelodyStyle,
    beat_seconds: f64,
    duration: f64,
) -> Vec<MelodyNote> {
    let pool = pitch_pool(key, style);
    if pool.is_empty() {
        warn!(range = ?style.pitch_range, "empty melody pitch pool");
        return Vec::new();
    }

    let step = beat_seconds / style.density.max(1) as f64;
    let [vel_lo, vel_hi] = style.velocity_range;

    let mut notes = Vec::new();
    let mut t = 0.0;
    while t < duration {
        let (Some(&midi_pitch), velocity, Some(&len_beats)) = (
            rng.pick(&pool),
            rng.range(vel_lo, vel_hi),
            rng.pick(&style.note_lengths_beats),
        ) else {
            break;
        };

        let start = t;
        let end = duration.min(t + len_beats * beat_seconds);
        notes.push(MelodyNote {
            index: notes.len(),
            start_seconds: start,
            duration_seconds: end - start,
            midi_pitch,
            velocity,
            scale_degree: key.degree_of(midi_pitch),
        });

        t += match mood {
            Mood::Calm => (end - start) + if rng.coin() { 0.0 } else { step },
            Mood::Tense => step,
        };
    }
    notes
}
