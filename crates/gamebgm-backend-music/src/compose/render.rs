//! Renders a planned composition into samples.

use gamebgm_backend_audio::{NoteEvent, SampleBuffer};

use super::Composition;

/// All note events of a composition in render order: per bar the three pad
/// notes then the bass hits, then the melody.
pub(super) fn note_events(composition: &Composition) -> Vec<NoteEvent> {
    let preset = &composition.preset;
    let duration = composition.duration_seconds();

    let harmonic = composition.chords.iter().flat_map(|chord| {
        chord
            .pad_events(preset)
            .into_iter()
            .chain(chord.bass_events(preset, composition.beat_seconds, duration))
    });
    let lead = composition
        .melody
        .iter()
        .map(|note| note.event(&preset.lead));

    harmonic.chain(lead).collect()
}

pub(super) fn render(composition: &Composition) -> SampleBuffer {
    let mut buffer = SampleBuffer::for_duration(composition.duration_seconds());
    for note in note_events(composition) {
        buffer.add_note(&note);
    }
    buffer
}
