//! gamebgm Parameter Library
//!
//! This crate provides the parameter types accepted by the gamebgm music engine,
//! together with the validation and clamping rules applied before any synthesis
//! runs.
//!
//! # Overview
//!
//! A generation request is a small set of semantic knobs:
//!
//! - **Mood**: `calm` or `tense` (required, anything else is rejected)
//! - **Tempo** and **duration**: required finite numbers, silently clamped to
//!   the supported ranges
//! - **Seed**: drives every random decision of the composition
//! - **Scene**, **style tags**, **lead hint**, **prompt**: optional descriptive
//!   inputs that steer the timbre preset
//!
//! # Example
//!
//! ```
//! use gamebgm_spec::{Mood, Scene, SynthParameters};
//!
//! let params = SynthParameters::new(Mood::Calm, 90.0, 1000.0, 42)
//!     .unwrap()
//!     .with_scene(Scene::Town)
//!     .with_style_tag("Ambient");
//!
//! // Out-of-range durations are clamped, never rejected.
//! assert_eq!(params.duration_seconds, 20.0);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Parameter errors and the stable error-code trait
//! - [`params`]: Validated parameter types and range constants
//! - [`request`]: Raw (unvalidated) request type deserialized from JSON

pub mod error;
pub mod params;
pub mod request;

// Re-export commonly used types at the crate root
pub use error::{BackendError, ParamError};
pub use params::{
    clamp_duration, clamp_tempo, Mood, Scene, SynthParameters, MAX_DURATION_SECONDS,
    MAX_TEMPO_BPM, MIN_DURATION_SECONDS, MIN_TEMPO_BPM,
};
pub use request::{GenerationRequest, RequestEcho};
