//! gamebgm Music Backend - Deterministic Mood-Driven Composition
//!
//! This crate turns validated [`gamebgm_spec::SynthParameters`] into a mono
//! 16-bit WAV file plus a structural description of what was played.
//!
//! # Pipeline
//!
//! - **Key and harmony**: mood picks a key (C major or A minor), a scale and a
//!   four-chord progression
//! - **Timbre preset**: lead hint, style tags, prompt and scene resolve a
//!   [`preset::TimbrePreset`] for the pad, bass and lead voices
//! - **Composition**: one triad pad and four bass hits per bar, plus a seeded
//!   random melody drawn from the scale
//! - **Synthesis**: every note is rendered additively into one buffer, then
//!   normalized, soft clipped and quantized by `gamebgm-backend-audio`
//! - **Metadata**: key, scale, chords and melody notes, derived from the same
//!   plan as the audio
//!
//! # Determinism
//!
//! Given the same parameters (seed included), the WAV bytes and the metadata
//! are identical on every run. The only randomness is the xorshift stream
//! seeded from `params.seed`, consumed in a fixed order by the melody pass.
//!
//! # Example
//!
//! ```
//! use gamebgm_backend_music::generate;
//! use gamebgm_spec::{Mood, SynthParameters};
//!
//! let params = SynthParameters::new(Mood::Tense, 160.0, 3.0, 7).unwrap();
//! let result = generate(&params);
//!
//! assert_eq!(&result.wav_bytes()[0..4], b"RIFF");
//! assert_eq!(result.metadata.key.pitch_class, "A");
//! ```
//!
//! # Module Structure
//!
//! - [`note`]: Note names and MIDI/frequency conversion
//! - [`harmony`]: Scales, progressions and key selection
//! - [`preset`]: Timbre preset resolution
//! - [`compose`]: Chord and melody sequencing, rendering
//! - [`metadata`]: Structural description of a piece
//! - [`generate`]: Main generation entry point

pub mod compose;
pub mod generate;
pub mod harmony;
pub mod metadata;
pub mod note;
pub mod preset;

// Re-export main types
pub use compose::{compose, Chord, Composition, MelodyNote};
pub use generate::{generate, generate_request, GenerateError, GenerateResult};
pub use harmony::{degree_in_scale, progression_for, scale_for, ChordQuality, KeyContext};
pub use metadata::{build_metadata, Metadata};
pub use note::{midi_to_freq, note_name, pitch_class_name};
pub use preset::{resolve_preset, LeadPreset, TimbrePreset};

/// Crate version for backend identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Backend identifier.
pub const BACKEND_ID: &str = "gamebgm-backend-music";
