//! Main entry point for music generation.
//!
//! [`generate`] runs the full pipeline for validated parameters:
//!
//! 1. [`crate::compose::compose`] plans key, chords and melody
//! 2. [`crate::compose::Composition::render`] synthesizes every note into one
//!    shared buffer
//! 3. the mixer normalizes, soft clips and quantizes to 16-bit PCM
//! 4. the WAV writer wraps the PCM
//! 5. [`crate::metadata::build_metadata`] summarizes the same composition
//!
//! [`generate_request`] does the same for a raw request, rejecting invalid
//! parameters before any buffer is allocated.

use gamebgm_backend_audio::{master_to_pcm16, WavResult};
use gamebgm_spec::{BackendError, GenerationRequest, ParamError, SynthParameters};
use thiserror::Error;
use tracing::debug;

use crate::compose::{compose, Composition};
use crate::metadata::{build_metadata, Metadata};


/// Error type for music generation.
///
/// Only parameter validation can fail; once parameters are accepted the
/// pipeline always produces output.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The request was rejected during validation.
    #[error(transparent)]
    Params(#[from] ParamError),
}

impl BackendError for GenerateError {
    fn code(&self) -> &'static str {
        match self {
            GenerateError::Params(err) => err.code(),
        }
    }

    fn category(&self) -> &'static str {
        match self {
            GenerateError::Params(err) => err.category(),
        }
    }
}

/// Result of music generation.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Complete WAV file and PCM hash.
    pub wav: WavResult,
    /// Duration used after clamping.
    pub duration_seconds_actual: f64,
    /// Tempo used after clamping.
    pub tempo_bpm_actual: f64,
    pub metadata: Metadata,
    /// The plan the audio was rendered from.
    pub composition: Composition,
}

impl GenerateResult {
    /// WAV file bytes, header included.
    pub fn wav_bytes(&self) -> &[u8] {
        &self.wav.wav_data
    }

    /// BLAKE3 hash of the PCM payload.
    pub fn pcm_hash(&self) -> &str {
        &self.wav.pcm_hash
    }
}

/// Generates a piece from validated parameters.
///
/// This is a pure function of `params`: identical inputs always produce
/// byte-identical WAV data and identical metadata. Tempo and duration are
/// clamped before synthesis and the clamped values are reported.
///
/// # Example
/// ```
/// use gamebgm_backend_music::generate;
/// use gamebgm_spec::{Mood, SynthParameters};
///
/// let params = SynthParameters::new(Mood::Calm, 90.0, 5.0, 42).unwrap();
/// let result = generate(&params);
/// assert_eq!(result.wav_bytes().len(), 44 + 2 * 220_500);
/// assert_eq!(result.metadata.chords.len(), 2);
/// ```
pub fn generate(params: &SynthParameters) -> GenerateResult {
    let composition = compose(params);
    let buffer = composition.render();
    let pcm = master_to_pcm16(buffer.samples());
    let wav = WavResult::from_pcm16(&pcm, buffer.sample_rate());
    let metadata = build_metadata(&composition);

    debug!(
        seed = params.seed,
        samples = wav.num_samples,
        pcm_hash = %wav.pcm_hash,
        "generated track"
    );

    GenerateResult {
        wav,
        duration_seconds_actual: composition.params.duration_seconds,
        tempo_bpm_actual: composition.params.tempo_bpm,
        metadata,
        composition,
    }
}

/// Validates a raw request and generates a piece.
///
/// The request's descriptive fields are echoed into the metadata.
pub fn generate_request(request: &GenerationRequest) -> Result<GenerateResult, GenerateError> {
    let params = request.validate()?;
    let mut result = generate(&params);
    result.metadata = result.metadata.with_request(request.echo());
    Ok(result)
}
