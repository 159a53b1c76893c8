//! Deterministic WAV file writer.
//!
//! This module writes canonical 44-byte-header, 16-bit PCM WAV files with no
//! timestamps or optional chunks, so identical PCM always yields identical
//! bytes. The hash of the PCM payload doubles as a cheap determinism check.

mod format;
mod pcm;
mod result;
mod writer;

#[cfg(test)]
mod tests;

// Re-export public API
pub use format::{WavFormat, WavHeader, HEADER_LEN};
pub use pcm::{compute_pcm_hash, decode_pcm16, extract_pcm_data, parse_header};
pub use result::WavResult;
pub use writer::{encode_header, pcm16_to_bytes, write_wav, write_wav_to_vec};
