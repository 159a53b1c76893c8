//! Validated synthesis parameters.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParamError;

/// Lowest supported tempo in beats per minute.
pub const MIN_TEMPO_BPM: f64 = 40.0;
/// Highest supported tempo in beats per minute.
pub const MAX_TEMPO_BPM: f64 = 240.0;
/// Shortest supported duration in seconds.
pub const MIN_DURATION_SECONDS: f64 = 3.0;
/// Longest supported duration in seconds. Bounds the CPU time of one run.
pub const MAX_DURATION_SECONDS: f64 = 20.0;

/// Overall character of the generated track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Major key, sparse melody, longer notes.
    Calm,
    /// Minor key, denser melody, short notes.
    Tense,
}

impl Mood {
    /// Returns the wire name of this mood.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Calm => "calm",
            Mood::Tense => "tense",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "calm" => Ok(Mood::Calm),
            "tense" => Ok(Mood::Tense),
            other => Err(ParamError::invalid_mood(other)),
        }
    }
}

/// Game scene the music is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scene {
    Battle,
    Boss,
    Stealth,
    Town,
    Ui,
    Puzzle,
    /// Any scene without dedicated handling (exploration, menus, ...).
    #[serde(other)]
    Other,
}

impl Scene {
    /// Parses a scene name. Empty input means "no scene"; unknown names map to
    /// [`Scene::Other`].
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(match name.to_ascii_lowercase().as_str() {
            "battle" => Scene::Battle,
            "boss" => Scene::Boss,
            "stealth" => Scene::Stealth,
            "town" => Scene::Town,
            "ui" => Scene::Ui,
            "puzzle" => Scene::Puzzle,
            _ => Scene::Other,
        })
    }

    /// Battle, boss and stealth scenes: fast, loud melodies.
    pub fn is_battle_like(&self) -> bool {
        matches!(self, Scene::Battle | Scene::Boss | Scene::Stealth)
    }

    /// Town and UI scenes: relaxed, quiet melodies.
    pub fn is_town_like(&self) -> bool {
        matches!(self, Scene::Town | Scene::Ui)
    }

    /// Puzzle scenes.
    pub fn is_puzzle_like(&self) -> bool {
        matches!(self, Scene::Puzzle)
    }
}

/// Clamps a tempo into `[MIN_TEMPO_BPM, MAX_TEMPO_BPM]`. NaN maps to the
/// lower bound.
pub fn clamp_tempo(tempo_bpm: f64) -> f64 {
    if tempo_bpm.is_nan() {
        return MIN_TEMPO_BPM;
    }
    tempo_bpm.clamp(MIN_TEMPO_BPM, MAX_TEMPO_BPM)
}

/// Clamps a duration into `[MIN_DURATION_SECONDS, MAX_DURATION_SECONDS]`. NaN
/// maps to the lower bound.
pub fn clamp_duration(duration_seconds: f64) -> f64 {
    if duration_seconds.is_nan() {
        return MIN_DURATION_SECONDS;
    }
    duration_seconds.clamp(MIN_DURATION_SECONDS, MAX_DURATION_SECONDS)
}

fn require_finite(name: &'static str, value: f64) -> Result<f64, ParamError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParamError::invalid_numeric(name, value.to_string()))
    }
}

/// Parameters accepted by the engine.
///
/// [`SynthParameters::new`], [`crate::GenerationRequest::validate`] and
/// deserialization all reject non-finite tempo or duration and clamp finite
/// values into range. The fields stay public, so the engine re-applies the
/// clamp through [`SynthParameters::clamped`] before synthesizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SynthParametersWire")]
pub struct SynthParameters {
    pub mood: Mood,
    pub tempo_bpm: f64,
    pub duration_seconds: f64,
    pub seed: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<Scene>,
    pub theme_tags: BTreeSet<String>,
    pub style_tags: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_instrument_hint: Option<String>,
    /// Free-text description, scanned for style keywords.
    pub prompt: String,
}

/// Serialized form of [`SynthParameters`], checked on the way in.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthParametersWire {
    mood: Mood,
    tempo_bpm: f64,
    duration_seconds: f64,
    seed: u32,
    #[serde(default)]
    scene: Option<Scene>,
    #[serde(default)]
    theme_tags: BTreeSet<String>,
    #[serde(default)]
    style_tags: BTreeSet<String>,
    #[serde(default)]
    lead_instrument_hint: Option<String>,
    #[serde(default)]
    prompt: String,
}

impl TryFrom<SynthParametersWire> for SynthParameters {
    type Error = ParamError;

    fn try_from(wire: SynthParametersWire) -> Result<Self, Self::Error> {
        let mut params = SynthParameters::new(
            wire.mood,
            wire.tempo_bpm,
            wire.duration_seconds,
            wire.seed,
        )?;
        params.scene = wire.scene;
        params.theme_tags = wire.theme_tags;
        params.style_tags = wire.style_tags;
        params.lead_instrument_hint = wire.lead_instrument_hint;
        params.prompt = wire.prompt;
        Ok(params)
    }
}

impl SynthParameters {
    /// Creates parameters from the required fields.
    ///
    /// Non-finite tempo or duration is rejected; finite values outside the
    /// supported ranges are clamped.
    pub fn new(
        mood: Mood,
        tempo_bpm: f64,
        duration_seconds: f64,
        seed: u32,
    ) -> Result<Self, ParamError> {
        let tempo_bpm = clamp_tempo(require_finite("tempo", tempo_bpm)?);
        let duration_seconds = clamp_duration(require_finite("duration", duration_seconds)?);

        Ok(Self {
            mood,
            tempo_bpm,
            duration_seconds,
            seed,
            scene: None,
            theme_tags: BTreeSet::new(),
            style_tags: BTreeSet::new(),
            lead_instrument_hint: None,
            prompt: String::new(),
        })
    }

    /// Sets the scene.
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = Some(scene);
        self
    }

    /// Adds a theme tag.
    pub fn with_theme_tag(mut self, tag: impl Into<String>) -> Self {
        self.theme_tags.insert(tag.into());
        self
    }

    /// Adds a style tag.
    pub fn with_style_tag(mut self, tag: impl Into<String>) -> Self {
        self.style_tags.insert(tag.into());
        self
    }

    /// Sets the lead instrument hint. Blank hints are ignored.
    pub fn with_lead_hint(mut self, hint: impl Into<String>) -> Self {
        let hint = hint.into();
        self.lead_instrument_hint = if hint.trim().is_empty() {
            None
        } else {
            Some(hint)
        };
        self
    }

    /// Sets the free-text prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a copy with tempo and duration forced into their supported
    /// ranges. A no-op for parameters built through [`SynthParameters::new`].
    pub fn clamped(&self) -> Self {
        Self {
            tempo_bpm: clamp_tempo(self.tempo_bpm),
            duration_seconds: clamp_duration(self.duration_seconds),
            ..self.clone()
        }
    }

    /// Length of one beat in seconds.
    pub fn beat_seconds(&self) -> f64 {
        60.0 / self.tempo_bpm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mood_from_str() {
        assert_eq!("calm".parse::<Mood>().unwrap(), Mood::Calm);
        assert_eq!("tense".parse::<Mood>().unwrap(), Mood::Tense);

        let err = "happy".parse::<Mood>().unwrap_err();
        assert_eq!(err, ParamError::invalid_mood("happy"));
    }

    #[test]
    fn test_mood_is_case_sensitive() {
        assert!("Calm".parse::<Mood>().is_err());
    }

    #[test]
    fn test_mood_serde() {
        assert_eq!(serde_json::to_string(&Mood::Tense).unwrap(), "\"tense\"");
        let mood: Mood = serde_json::from_str("\"calm\"").unwrap();
        assert_eq!(mood, Mood::Calm);
    }

    #[test]
    fn test_scene_parse() {
        assert_eq!(Scene::parse("battle"), Some(Scene::Battle));
        assert_eq!(Scene::parse(" Boss "), Some(Scene::Boss));
        assert_eq!(Scene::parse("ui"), Some(Scene::Ui));
        assert_eq!(Scene::parse("explore"), Some(Scene::Other));
        assert_eq!(Scene::parse(""), None);
        assert_eq!(Scene::parse("   "), None);
    }

    #[test]
    fn test_scene_serde_unknown_is_other() {
        let scene: Scene = serde_json::from_str("\"dungeon\"").unwrap();
        assert_eq!(scene, Scene::Other);
        let scene: Scene = serde_json::from_str("\"stealth\"").unwrap();
        assert_eq!(scene, Scene::Stealth);
    }

    #[test]
    fn test_scene_groups() {
        assert!(Scene::Stealth.is_battle_like());
        assert!(!Scene::Town.is_battle_like());
        assert!(Scene::Ui.is_town_like());
        assert!(Scene::Puzzle.is_puzzle_like());
        assert!(!Scene::Other.is_battle_like());
        assert!(!Scene::Other.is_town_like());
        assert!(!Scene::Other.is_puzzle_like());
    }

    #[test]
    fn test_new_clamps_out_of_range() {
        let params = SynthParameters::new(Mood::Calm, 10.0, 1000.0, 1).unwrap();
        assert_eq!(params.tempo_bpm, MIN_TEMPO_BPM);
        assert_eq!(params.duration_seconds, MAX_DURATION_SECONDS);

        let params = SynthParameters::new(Mood::Tense, 999.0, 0.5, 1).unwrap();
        assert_eq!(params.tempo_bpm, MAX_TEMPO_BPM);
        assert_eq!(params.duration_seconds, MIN_DURATION_SECONDS);
    }

    #[test]
    fn test_deserialize_clamps_out_of_range() {
        let params: SynthParameters = serde_json::from_str(
            r#"{"mood":"tense","tempoBpm":1000,"durationSeconds":60,"seed":1}"#,
        )
        .unwrap();
        assert_eq!(params.tempo_bpm, MAX_TEMPO_BPM);
        assert_eq!(params.duration_seconds, MAX_DURATION_SECONDS);
        assert_eq!(params.prompt, "");
        assert!(params.style_tags.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_unknown_mood() {
        let err = serde_json::from_str::<SynthParameters>(
            r#"{"mood":"happy","tempoBpm":120,"durationSeconds":5,"seed":1}"#,
        )
        .unwrap_err();
        assert!(err.is_data());
    }

    #[test]
    fn test_serialized_params_read_back() {
        let params = SynthParameters::new(Mood::Calm, 90.0, 5.0, 42)
            .unwrap()
            .with_scene(Scene::Town)
            .with_style_tag("ambient");
        let json = serde_json::to_string(&params).unwrap();
        let back: SynthParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn test_clamped_repairs_struct_literals() {
        let params = SynthParameters {
            tempo_bpm: 1000.0,
            duration_seconds: f64::NAN,
            ..SynthParameters::new(Mood::Tense, 120.0, 5.0, 1).unwrap()
        };
        let clamped = params.clamped();
        assert_eq!(clamped.tempo_bpm, MAX_TEMPO_BPM);
        assert_eq!(clamped.duration_seconds, MIN_DURATION_SECONDS);
        assert_eq!(clamped.seed, 1);

        let valid = SynthParameters::new(Mood::Calm, 90.0, 5.0, 42).unwrap();
        assert_eq!(valid.clamped(), valid);
    }

    #[test]
    fn test_new_keeps_in_range_values() {
        let params = SynthParameters::new(Mood::Tense, 160.0, 20.0, 7).unwrap();
        assert_eq!(params.tempo_bpm, 160.0);
        assert_eq!(params.duration_seconds, 20.0);
        assert_eq!(params.seed, 7);
    }

    #[test]
    fn test_new_rejects_non_finite() {
        let err = SynthParameters::new(Mood::Calm, f64::NAN, 5.0, 0).unwrap_err();
        assert!(matches!(
            err,
            ParamError::InvalidNumericParameter { name: "tempo", .. }
        ));

        let err = SynthParameters::new(Mood::Calm, 90.0, f64::INFINITY, 0).unwrap_err();
        assert!(matches!(
            err,
            ParamError::InvalidNumericParameter {
                name: "duration",
                ..
            }
        ));
    }

    #[test]
    fn test_builder_methods() {
        let params = SynthParameters::new(Mood::Calm, 90.0, 5.0, 42)
            .unwrap()
            .with_scene(Scene::Puzzle)
            .with_style_tag("Rock/metal")
            .with_theme_tag("space")
            .with_lead_hint("  ")
            .with_prompt("heavy riffs");

        assert_eq!(params.scene, Some(Scene::Puzzle));
        assert!(params.style_tags.contains("Rock/metal"));
        assert!(params.theme_tags.contains("space"));
        assert_eq!(params.lead_instrument_hint, None);
        assert_eq!(params.prompt, "heavy riffs");
    }

    #[test]
    fn test_beat_seconds() {
        let params = SynthParameters::new(Mood::Calm, 120.0, 5.0, 0).unwrap();
        assert!((params.beat_seconds() - 0.5).abs() < 1e-12);
    }
}
