//! Tests for the WAV writer module.

use pretty_assertions::assert_eq;

use super::format::{WavFormat, HEADER_LEN};
use super::pcm::{compute_pcm_hash, decode_pcm16, extract_pcm_data, parse_header};
use super::result::WavResult;
use super::writer::{encode_header, pcm16_to_bytes, write_wav, write_wav_to_vec};

// =========================================================================
// WavFormat tests
// =========================================================================

#[test]
fn test_wav_format_mono() {
    let format = WavFormat::mono(44100);
    assert_eq!(format.channels, 1);
    assert_eq!(format.sample_rate, 44100);
    assert_eq!(format.bits_per_sample, 16);
    assert_eq!(format.byte_rate(), 88200);
    assert_eq!(format.block_align(), 2);
}

// =========================================================================
// Header layout tests
// =========================================================================

#[test]
fn test_header_byte_layout() {
    let header = encode_header(&WavFormat::mono(44100), 200);

    assert_eq!(&header[0..4], b"RIFF");
    assert_eq!(&header[4..8], &236u32.to_le_bytes());
    assert_eq!(&header[8..12], b"WAVE");
    assert_eq!(&header[12..16], b"fmt ");
    assert_eq!(&header[16..20], &[16, 0, 0, 0]);
    assert_eq!(&header[20..22], &[1, 0]);
    assert_eq!(&header[22..24], &[1, 0]);
    assert_eq!(&header[24..28], &[0x44, 0xAC, 0x00, 0x00]);
    assert_eq!(&header[28..32], &[0x88, 0x58, 0x01, 0x00]);
    assert_eq!(&header[32..34], &[2, 0]);
    assert_eq!(&header[34..36], &[16, 0]);
    assert_eq!(&header[36..40], b"data");
    assert_eq!(&header[40..44], &[200, 0, 0, 0]);
}

#[test]
fn test_header_round_trips_through_parser() {
    let wav = write_wav_to_vec(&WavFormat::mono(44100), &[0u8; 10]);
    let header = parse_header(&wav).expect("canonical header");

    assert_eq!(header.riff_size, 46);
    assert_eq!(header.audio_format, 1);
    assert_eq!(header.format, WavFormat::mono(44100));
    assert_eq!(header.byte_rate, 88200);
    assert_eq!(header.block_align, 2);
    assert_eq!(header.data_size, 10);
    assert_eq!(header.num_frames(), 5);
}

#[test]
fn test_parse_header_rejects_garbage() {
    assert!(parse_header(&[0u8; 10]).is_none());
    assert!(parse_header(&[0u8; 44]).is_none());

    let mut wav = write_wav_to_vec(&WavFormat::mono(8000), &[]);
    wav[36..40].copy_from_slice(b"LIST");
    assert!(parse_header(&wav).is_none());
}

// =========================================================================
// PCM tests
// =========================================================================

#[test]
fn test_pcm16_to_bytes_little_endian() {
    let bytes = pcm16_to_bytes(&[1, -1, 0x1234]);
    assert_eq!(bytes, vec![0x01, 0x00, 0xFF, 0xFF, 0x34, 0x12]);
}

#[test]
fn test_decode_pcm16() {
    let samples = vec![0, 32767, -32768, -2, 1234];
    assert_eq!(decode_pcm16(&pcm16_to_bytes(&samples)), samples);
    assert_eq!(decode_pcm16(&[0x01, 0x00, 0x07]), vec![1]);
}

#[test]
fn test_extract_pcm_data() {
    let pcm = pcm16_to_bytes(&[5; 100]);
    let wav = write_wav_to_vec(&WavFormat::mono(44100), &pcm);

    let extracted = extract_pcm_data(&wav).expect("should extract PCM");
    assert_eq!(extracted, pcm.as_slice());
}

#[test]
fn test_extract_pcm_data_skips_extra_chunks() {
    let mut wav = Vec::new();
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&0u32.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"junk");
    wav.extend_from_slice(&3u32.to_le_bytes());
    wav.extend_from_slice(&[9, 9, 9, 0]); // odd chunk + pad byte
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&4u32.to_le_bytes());
    wav.extend_from_slice(&[1, 2, 3, 4]);
    wav.extend_from_slice(&[0u8; 16]);

    assert_eq!(extract_pcm_data(&wav), Some(&[1u8, 2, 3, 4][..]));
}

#[test]
fn test_extract_pcm_data_truncated() {
    let mut wav = write_wav_to_vec(&WavFormat::mono(44100), &[0u8; 8]);
    wav.truncate(HEADER_LEN + 4);
    assert!(extract_pcm_data(&wav).is_none());
}

#[test]
fn test_write_wav_matches_vec() {
    let pcm = pcm16_to_bytes(&[100, -100, 200]);
    let format = WavFormat::mono(22050);

    let mut streamed = Vec::new();
    write_wav(&mut streamed, &format, &pcm).unwrap();

    assert_eq!(streamed, write_wav_to_vec(&format, &pcm));
}

// =========================================================================
// WavResult tests
// =========================================================================

#[test]
fn test_wav_result() {
    let result = WavResult::from_pcm16(&[1, 2, 3, 4], 44100);

    assert_eq!(result.sample_rate, 44100);
    assert_eq!(result.num_samples, 4);
    assert_eq!(result.data_size(), 8);
    assert_eq!(result.wav_data.len(), HEADER_LEN + 8);
    assert_eq!(result.pcm_hash.len(), 64);
    assert!(result.pcm_hash.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_pcm_hash_matches_recomputed() {
    let result = WavResult::from_pcm16(&[7, -7, 300], 44100);
    assert_eq!(compute_pcm_hash(&result.wav_data), Some(result.pcm_hash.clone()));
}

#[test]
fn test_pcm_hash_changes_with_content() {
    let a = WavResult::from_pcm16(&[1, 2, 3], 44100);
    let b = WavResult::from_pcm16(&[1, 2, 4], 44100);
    assert_ne!(a.pcm_hash, b.pcm_hash);
}

#[test]
fn test_duration() {
    let result = WavResult::from_pcm16(&[0; 22050], 44100);
    assert!((result.duration_seconds() - 0.5).abs() < 1e-12);
}
