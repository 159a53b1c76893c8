//! Header parsing, PCM extraction and hashing utilities.

use super::format::{WavFormat, WavHeader, HEADER_LEN};

fn u16_at(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn u32_at(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Parses a canonical 44-byte WAV header.
///
/// Returns `None` if the buffer is too short or the chunk tags are not where
/// the canonical layout puts them.
pub fn parse_header(wav_data: &[u8]) -> Option<WavHeader> {
    if wav_data.len() < HEADER_LEN {
        return None;
    }
    if &wav_data[0..4] != b"RIFF"
        || &wav_data[8..12] != b"WAVE"
        || &wav_data[12..16] != b"fmt "
        || &wav_data[36..40] != b"data"
    {
        return None;
    }

    Some(WavHeader {
        riff_size: u32_at(wav_data, 4),
        audio_format: u16_at(wav_data, 20),
        format: WavFormat {
            channels: u16_at(wav_data, 22),
            sample_rate: u32_at(wav_data, 24),
            bits_per_sample: u16_at(wav_data, 34),
        },
        byte_rate: u32_at(wav_data, 28),
        block_align: u16_at(wav_data, 32),
        data_size: u32_at(wav_data, 40),
    })
}

/// Extracts PCM data from a WAV file buffer.
///
/// Walks the chunk list after the RIFF header, so files with extra chunks
/// are handled too.
///
/// # Returns
/// PCM data if found, or None if the format is invalid
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < HEADER_LEN {
        return None;
    }

    // Verify RIFF header
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    // Find data chunk
    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32_at(wav_data, pos + 4) as usize;

        if chunk_id == b"data" {
            let data_start = pos + 8;
            let data_end = data_start.checked_add(chunk_size)?;
            if data_end <= wav_data.len() {
                return Some(&wav_data[data_start..data_end]);
            }
            return None;
        }

        pos = pos.checked_add(8 + chunk_size)?;
        // Align to word boundary
        if !chunk_size.is_multiple_of(2) {
            pos += 1;
        }
    }

    None
}

/// Decodes little-endian 16-bit PCM. A trailing odd byte is ignored.
pub fn decode_pcm16(pcm_data: &[u8]) -> Vec<i16> {
    pcm_data
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

/// Computes the PCM hash of a WAV file.
///
/// # Returns
/// BLAKE3 hash of PCM data, or None if format is invalid
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
