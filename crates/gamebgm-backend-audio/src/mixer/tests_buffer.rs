//! Tests for the sample buffer.

use super::*;
use crate::envelope::AdsrParams;
use crate::oscillator::{NoteEvent, WaveMix};

fn tone(start: f64, dur: f64) -> NoteEvent {
    NoteEvent {
        frequency: 220.0,
        start_seconds: start,
        duration_seconds: dur,
        velocity: 0.3,
        wave_mix: WaveMix::new(0.85, 0.1, 0.05),
        detune_cents: 0.0,
        adsr: AdsrParams::default(),
    }
}

#[test]
fn test_buffer_length_is_rounded() {
    assert_eq!(SampleBuffer::for_duration(5.0).len(), 220_500);
    assert_eq!(SampleBuffer::for_duration(3.00001).len(), 132_300);
    assert_eq!(SampleBuffer::with_sample_rate(0.5, 10).len(), 5);
    assert_eq!(SampleBuffer::with_sample_rate(0.55, 10).len(), 6);
}

#[test]
fn test_new_buffer_is_silent() {
    let buffer = SampleBuffer::for_duration(3.0);
    assert!(buffer.samples().iter().all(|&s| s == 0.0));
    assert_eq!(buffer.sample_rate(), SAMPLE_RATE);
    assert!((buffer.duration_seconds() - 3.0).abs() < 1e-12);
}

#[test]
fn test_negative_duration_is_empty() {
    let buffer = SampleBuffer::for_duration(-1.0);
    assert!(buffer.is_empty());
}

#[test]
fn test_add_note_accumulates() {
    let mut buffer = SampleBuffer::for_duration(3.0);
    buffer.add_note(&tone(0.0, 1.0));
    let first = buffer.samples()[1000];
    buffer.add_note(&tone(0.0, 1.0));
    assert!((buffer.samples()[1000] - 2.0 * first).abs() < 1e-12);
}

#[test]
fn test_render_order_does_not_matter() {
    let a = tone(0.0, 1.0);
    let b = NoteEvent {
        frequency: 330.0,
        ..tone(0.5, 1.0)
    };

    let mut ab = SampleBuffer::for_duration(3.0);
    ab.add_note(&a);
    ab.add_note(&b);

    let mut ba = SampleBuffer::for_duration(3.0);
    ba.add_note(&b);
    ba.add_note(&a);

    for (x, y) in ab.samples().iter().zip(ba.samples()) {
        assert!((x - y).abs() < 1e-12);
    }
}
