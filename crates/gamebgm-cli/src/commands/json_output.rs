//! JSON output types for machine-readable CLI output (`--json`).

use gamebgm_backend_music::Metadata;
use gamebgm_spec::{BackendError, SynthParameters};
use serde::Serialize;

/// Error codes for CLI operations. Backend error codes pass through as-is.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
    /// File could not be written
    pub const FILE_WRITE: &str = "CLI_003";
    /// Input is not a canonical mono 16-bit WAV file
    pub const INVALID_WAV: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "PARAM_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates an error from any backend error, keeping its code.
    pub fn from_backend<E: BackendError>(err: &E) -> Self {
        Self::new(err.code(), err.message())
    }
}

/// Output of `generate --json`.
#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateSummary>,
}

#[derive(Debug, Serialize)]
pub struct GenerateSummary {
    pub wav_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_path: Option<String>,
    pub bytes: usize,
    pub pcm_hash: String,
    pub duration_seconds: f64,
    pub tempo_bpm: f64,
    pub metadata: Metadata,
}

/// Output of `validate --json`.
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<SynthParameters>,
}

/// Output of `inspect --json`.
#[derive(Debug, Serialize)]
pub struct InspectOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<WavSummary>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WavSummary {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    pub num_samples: usize,
    pub duration_seconds: f64,
    pub peak_sample: i32,
    pub pcm_hash: String,
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
