//! Composition sequencer.
//!
//! [`compose`] plans the whole piece up front into a [`Composition`]: the
//! key, one [`Chord`] per bar and the list of [`MelodyNote`]s. Both the audio
//! ([`Composition::render`]) and the metadata are derived from that one value,
//! so they cannot disagree.

mod harmonic;
mod melody;
mod render;


use gamebgm_backend_audio::{create_rng, SampleBuffer};
use gamebgm_spec::SynthParameters;
use tracing::debug;

use crate::harmony::KeyContext;
use crate::preset::{resolve_preset, TimbrePreset};

pub use harmonic::{plan_chords, Chord, BASS_GATE, BASS_HITS_PER_BAR};
pub use melody::{pitch_pool, plan_melody, MelodyNote};

/// Beats per bar.
pub const BEATS_PER_BAR: f64 = 4.0;

/// Everything needed to render a piece.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub params: SynthParameters,
    pub key: KeyContext,
    pub preset: TimbrePreset,
    pub beat_seconds: f64,
    pub bar_seconds: f64,
    pub chords: Vec<Chord>,
    pub melody: Vec<MelodyNote>,
}

/// Plans a composition.
///
/// Tempo and duration are clamped first, so the buffer size stays bounded
/// even for parameters built without [`SynthParameters::new`]. The RNG is
/// seeded here and consumed only by the melody pass, so chords depend on mood
/// and tempo alone.
pub fn compose(params: &SynthParameters) -> Composition {
    let clamped = params.clamped();
    if clamped.tempo_bpm != params.tempo_bpm || clamped.duration_seconds != params.duration_seconds {
        debug!(
            tempo_bpm = params.tempo_bpm,
            duration_seconds = params.duration_seconds,
            clamped_tempo_bpm = clamped.tempo_bpm,
            clamped_duration_seconds = clamped.duration_seconds,
            "clamped out-of-range parameters"
        );
    }
    let params = &clamped;

    let key = KeyContext::for_mood(params.mood);
    let preset = resolve_preset(params);
    let beat_seconds = params.beat_seconds();
    let bar_seconds = BEATS_PER_BAR * beat_seconds;
    let duration = params.duration_seconds;

    let chords = plan_chords(&key, bar_seconds, duration);

    let mut rng = create_rng(params.seed);
    let melody = plan_melody(
        &mut rng,
        &key,
        params.mood,
        &preset.melody,
        beat_seconds,
        duration,
    );

    debug!(
        mood = %params.mood,
        tempo_bpm = params.tempo_bpm,
        duration_seconds = duration,
        chords = chords.len(),
        melody_notes = melody.len(),
        "planned composition"
    );

    Composition {
        params: clamped,
        key,
        preset,
        beat_seconds,
        bar_seconds,
        chords,
        melody,
    }
}

impl Composition {
    /// Duration of the piece in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.params.duration_seconds
    }

    /// Every note of the piece, in the order it is rendered.
    pub fn note_events(&self) -> Vec<gamebgm_backend_audio::NoteEvent> {
        render::note_events(self)
    }

    /// Renders the composition into a fresh sample buffer.
    pub fn render(&self) -> SampleBuffer {
        render::render(self)
    }
}
