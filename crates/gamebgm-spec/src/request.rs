//! Raw generation requests.
//!
//! A [`GenerationRequest`] is what a host receives over the wire: every field
//! is optional and nothing has been checked yet. [`GenerationRequest::validate`]
//! applies the rejection and clamping rules and yields [`SynthParameters`].

use serde::{Deserialize, Serialize};

use crate::error::ParamError;
use crate::params::{Mood, Scene, SynthParameters};

/// Unvalidated request body, camelCase JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationRequest {
    pub mood: Option<String>,
    pub tempo: Option<f64>,
    pub duration: Option<f64>,
    /// Any JSON number; truncated and wrapped into 32 bits by
    /// [`GenerationRequest::seed_u32`].
    pub seed: Option<f64>,
    pub scene: Option<String>,
    pub themes: Vec<String>,
    pub atmospheres: Vec<String>,
    pub styles: Vec<String>,
    pub lead: Option<String>,
    pub prompt: Option<String>,
    pub loopable: Option<bool>,
    pub avoid: Vec<String>,
}

/// Descriptive request fields echoed back verbatim in the metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEcho {
    pub prompt: String,
    pub scene: String,
    pub themes: Vec<String>,
    pub atmospheres: Vec<String>,
    pub styles: Vec<String>,
    pub lead: String,
    pub loopable: Option<bool>,
    pub avoid: Vec<String>,
}

impl GenerationRequest {
    /// Parses a request from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validates the request.
    ///
    /// Checks run in a fixed order: mood, tempo, duration. The first failure
    /// is returned; no synthesis state is created for a rejected request.
    pub fn validate(&self) -> Result<SynthParameters, ParamError> {
        let mood: Mood = match self.mood.as_deref() {
            Some(name) => name.parse()?,
            None => return Err(ParamError::invalid_mood("null")),
        };
        let tempo = self
            .tempo
            .ok_or_else(|| ParamError::invalid_numeric("tempo", "null"))?;
        let duration = self
            .duration
            .ok_or_else(|| ParamError::invalid_numeric("duration", "null"))?;
        let seed = self.seed_u32().unwrap_or(0);

        let mut params = SynthParameters::new(mood, tempo, duration, seed)?;
        params.scene = self.scene.as_deref().and_then(Scene::parse);
        params.theme_tags = self.themes.iter().cloned().collect();
        params.style_tags = self.styles.iter().cloned().collect();
        if let Some(lead) = &self.lead {
            params = params.with_lead_hint(lead.clone());
        }
        if let Some(prompt) = &self.prompt {
            params.prompt = prompt.clone();
        }

        Ok(params)
    }

    /// The seed as a 32-bit value: truncated toward zero, then taken modulo
    /// 2^32 (so `-1` becomes `u32::MAX`). `None` when the seed is missing or
    /// not finite.
    pub fn seed_u32(&self) -> Option<u32> {
        self.seed
            .filter(|s| s.is_finite())
            .map(|s| s.trunc().rem_euclid(4_294_967_296.0) as u32)
    }

    /// Returns the descriptive fields to echo in the metadata.
    pub fn echo(&self) -> RequestEcho {
        RequestEcho {
            prompt: self.prompt.clone().unwrap_or_default(),
            scene: self.scene.clone().unwrap_or_default(),
            themes: self.themes.clone(),
            atmospheres: self.atmospheres.clone(),
            styles: self.styles.clone(),
            lead: self.lead.clone().unwrap_or_default(),
            loopable: self.loopable,
            avoid: self.avoid.clone(),
        }
    }
}
