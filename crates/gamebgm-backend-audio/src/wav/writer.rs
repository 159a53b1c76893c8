//! Header encoding and PCM serialization.

use std::io::{self, Write};

use super::format::{WavFormat, HEADER_LEN};

/// Encodes the canonical 44-byte header for `data_size` bytes of PCM.
///
/// Layout (all integers little-endian):
///
/// | Offset | Field |
/// |--------|-------|
/// | 0  | `RIFF` |
/// | 4  | `36 + data_size` (u32) |
/// | 8  | `WAVE` |
/// | 12 | `fmt ` |
/// | 16 | `16` (u32, fmt chunk size) |
/// | 20 | `1` (u16, PCM) |
/// | 22 | channels (u16) |
/// | 24 | sample rate (u32) |
/// | 28 | byte rate (u32) |
/// | 32 | block align (u16) |
/// | 34 | bits per sample (u16) |
/// | 36 | `data` |
/// | 40 | `data_size` (u32) |
pub fn encode_header(format: &WavFormat, data_size: u32) -> [u8; HEADER_LEN] {
    let mut header = [0u8; HEADER_LEN];
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&file_size.to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    // fmt chunk
    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes()); // Chunk size (16 for PCM)
    header[20..22].copy_from_slice(&1u16.to_le_bytes()); // Audio format (1 = PCM)
    header[22..24].copy_from_slice(&format.channels.to_le_bytes());
    header[24..28].copy_from_slice(&format.sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&format.byte_rate().to_le_bytes());
    header[32..34].copy_from_slice(&format.block_align().to_le_bytes());
    header[34..36].copy_from_slice(&format.bits_per_sample.to_le_bytes());

    // data chunk
    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());

    header
}

/// Serializes samples as little-endian 16-bit PCM.
pub fn pcm16_to_bytes(samples: &[i16]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        pcm.extend_from_slice(&sample.to_le_bytes());
    }
    pcm
}

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    writer.write_all(&encode_header(format, pcm_data.len() as u32))?;
    writer.write_all(pcm_data)?;
    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm_data.len());
    buffer.extend_from_slice(&encode_header(format, pcm_data.len() as u32));
    buffer.extend_from_slice(pcm_data);
    buffer
}
