//! Request loading for CLI commands.
//!
//! A request can come from a JSON file (`--request`), from flags, or both;
//! flags override fields loaded from the file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Args;
use gamebgm_spec::GenerationRequest;
use thiserror::Error;

use crate::commands::json_output::error_codes;

/// Errors from loading a request file.
#[derive(Debug, Error)]
pub enum RequestLoadError {
    /// The file could not be read.
    #[error("Failed to read request file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not a valid request document.
    #[error("Failed to parse request file: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl RequestLoadError {
    /// CLI error code reported in `--json` output.
    pub fn code(&self) -> &'static str {
        match self {
            RequestLoadError::Read { .. } => error_codes::FILE_READ,
            RequestLoadError::Parse { .. } => error_codes::JSON_PARSE,
        }
    }
}

/// Request fields shared by `generate` and `validate`.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct RequestArgs {
    /// Path to a JSON request file (camelCase fields, all optional)
    #[arg(short, long)]
    pub request: Option<String>,

    /// Mood: calm or tense
    #[arg(short, long)]
    pub mood: Option<String>,

    /// Tempo in BPM (clamped to 40..=240)
    #[arg(short, long, allow_hyphen_values = true)]
    pub tempo: Option<f64>,

    /// Duration in seconds (clamped to 3..=20)
    #[arg(short, long, allow_hyphen_values = true)]
    pub duration: Option<f64>,

    /// Random seed (wrapped to 32 bits)
    #[arg(long, allow_hyphen_values = true)]
    pub seed: Option<i64>,

    /// Game scene (battle, boss, stealth, town, ui, puzzle, ...)
    #[arg(long)]
    pub scene: Option<String>,

    /// Style tag; repeat for several (e.g. --style chiptune --style ambient)
    #[arg(long = "style")]
    pub styles: Vec<String>,

    /// Theme tag; repeat for several
    #[arg(long = "theme")]
    pub themes: Vec<String>,

    /// Lead instrument hint (guitar, strings, flute, brass, synth, ...)
    #[arg(long)]
    pub lead: Option<String>,

    /// Free-text prompt, scanned for style keywords
    #[arg(long)]
    pub prompt: Option<String>,
}

/// Reads a request from a JSON file.
pub fn load_request(path: &Path) -> Result<GenerationRequest, RequestLoadError> {
    let text = fs::read_to_string(path).map_err(|source| RequestLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    GenerationRequest::from_json(&text).map_err(|source| RequestLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl RequestArgs {
    /// Builds the request: file contents first, then flag overrides.
    pub fn to_request(&self) -> Result<GenerationRequest, RequestLoadError> {
        let mut request = match &self.request {
            Some(path) => load_request(Path::new(path))?,
            None => GenerationRequest::default(),
        };
        self.apply_overrides(&mut request);
        Ok(request)
    }

    fn apply_overrides(&self, request: &mut GenerationRequest) {
        if let Some(mood) = &self.mood {
            request.mood = Some(mood.clone());
        }
        if let Some(tempo) = self.tempo {
            request.tempo = Some(tempo);
        }
        if let Some(duration) = self.duration {
            request.duration = Some(duration);
        }
        if let Some(seed) = self.seed {
            request.seed = Some(seed as f64);
        }
        if let Some(scene) = &self.scene {
            request.scene = Some(scene.clone());
        }
        if !self.styles.is_empty() {
            request.styles = self.styles.clone();
        }
        if !self.themes.is_empty() {
            request.themes = self.themes.clone();
        }
        if let Some(lead) = &self.lead {
            request.lead = Some(lead.clone());
        }
        if let Some(prompt) = &self.prompt {
            request.prompt = Some(prompt.clone());
        }
    }
}

/// Seed used when a request carries none: wall-clock milliseconds, truncated
/// to 32 bits.
pub fn clock_seed() -> u32 {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    millis as u32
}
