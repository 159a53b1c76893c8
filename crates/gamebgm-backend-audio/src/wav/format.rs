//! WAV file format parameters.

/// Length of the canonical RIFF/WAVE header in bytes.
pub const HEADER_LEN: usize = 44;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono 16-bit WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Calculates block align (bytes per sample frame).
    pub fn block_align(&self) -> u16 {
        self.channels * self.bits_per_sample / 8
    }

    /// Calculates byte rate (bytes per second).
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.channels as u32 * self.bits_per_sample as u32 / 8
    }
}

/// Fields decoded from a canonical WAV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// RIFF chunk size (`36 + data_size` for a canonical file).
    pub riff_size: u32,
    /// Audio format tag (1 = PCM).
    pub audio_format: u16,
    pub format: WavFormat,
    pub byte_rate: u32,
    pub block_align: u16,
    /// Size of the data chunk in bytes.
    pub data_size: u32,
}

impl WavHeader {
    /// Number of sample frames in the data chunk.
    pub fn num_frames(&self) -> usize {
        let block_align = self.block_align.max(1) as usize;
        self.data_size as usize / block_align
    }

    /// Duration of the data chunk in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.format.sample_rate == 0 {
            return 0.0;
        }
        self.num_frames() as f64 / self.format.sample_rate as f64
    }
}
