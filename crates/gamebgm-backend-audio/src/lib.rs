//! gamebgm Audio Backend
//!
//! This crate holds the signal-level half of the gamebgm engine. It has no
//! notion of mood, scale or chord; it only knows how to turn note events into
//! samples and samples into a WAV file.
//!
//! # Overview
//!
//! - **Additive oscillator** - sine, triangle and saw at the note pitch plus a
//!   fixed-weight detuned sine, shaped by an ADSR envelope
//! - **Sample buffer** - a caller-owned accumulator; every note is *added*, so
//!   overlapping notes superpose
//! - **Mastering** - peak normalization to a fixed target, `tanh` soft clip and
//!   16-bit quantization
//! - **WAV writer** - canonical 44-byte RIFF/WAVE header, mono 16-bit PCM
//!
//! # Determinism
//!
//! All processing is deterministic. The only randomness comes from
//! [`rng::XorShift32`], a seeded 32-bit xorshift generator, so a given seed
//! always yields the same stream.
//!
//! # Example
//!
//! ```
//! use gamebgm_backend_audio::envelope::AdsrParams;
//! use gamebgm_backend_audio::mixer::{master_to_pcm16, SampleBuffer};
//! use gamebgm_backend_audio::oscillator::{NoteEvent, WaveMix};
//! use gamebgm_backend_audio::wav::WavResult;
//!
//! let mut buffer = SampleBuffer::for_duration(0.5);
//! buffer.add_note(&NoteEvent {
//!     frequency: 440.0,
//!     start_seconds: 0.0,
//!     duration_seconds: 0.5,
//!     velocity: 0.5,
//!     wave_mix: WaveMix::new(0.7, 0.25, 0.05),
//!     detune_cents: 4.0,
//!     adsr: AdsrParams::default(),
//! });
//!
//! let pcm = master_to_pcm16(buffer.samples());
//! let wav = WavResult::from_pcm16(&pcm, buffer.sample_rate());
//! assert_eq!(&wav.wav_data[0..4], b"RIFF");
//! ```
//!
//! # Crate Structure
//!
//! - [`rng`] - Seeded xorshift RNG
//! - [`envelope`] - ADSR amplitude envelope
//! - [`oscillator`] - Additive note synthesis
//! - [`mixer`] - Sample buffer and mastering chain
//! - [`wav`] - Deterministic WAV file writer

pub mod envelope;
pub mod mixer;
pub mod oscillator;
pub mod rng;
pub mod wav;

// Re-export main types at crate root
pub use envelope::AdsrParams;
pub use mixer::{master_to_pcm16, SampleBuffer, SAMPLE_RATE};
pub use oscillator::{synth_note, NoteEvent, WaveMix};
pub use rng::{create_rng, Draws, XorShift32};
pub use wav::{WavFormat, WavResult};
