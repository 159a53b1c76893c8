//! Error types for parameter validation.

use thiserror::Error;

/// Common interface for errors surfaced across crate boundaries.
///
/// Every error type reported to a caller implements this trait so that hosts
/// (the CLI, or an HTTP layer) can map errors to stable codes without matching
/// on concrete types.
///
/// # Example
///
/// ```
/// use gamebgm_spec::{BackendError, ParamError};
///
/// fn describe<E: BackendError>(err: &E) -> String {
///     format!("[{}] {}", err.code(), err.message())
/// }
///
/// let err = ParamError::invalid_mood("happy");
/// assert!(describe(&err).starts_with("[PARAM_001]"));
/// ```
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "PARAM_001". These codes are stable and
    /// can be used for programmatic error handling.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}

/// Errors raised while turning a request into [`crate::SynthParameters`].
///
/// Out-of-range but finite tempo and duration values are not errors; they are
/// clamped to the nearest supported bound.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    /// Mood is missing or not one of the recognized values.
    #[error("invalid mood: {value} (expected \"calm\" or \"tense\")")]
    InvalidMood {
        /// The rejected value, or `null` when missing.
        value: String,
    },

    /// A numeric parameter is missing, NaN or infinite.
    #[error("invalid {name}: {value} (expected a finite number)")]
    InvalidNumericParameter {
        /// Parameter name (`tempo` or `duration`).
        name: &'static str,
        /// The rejected value, rendered as text.
        value: String,
    },
}

impl ParamError {
    /// Creates an invalid mood error.
    pub fn invalid_mood(value: impl Into<String>) -> Self {
        Self::InvalidMood {
            value: value.into(),
        }
    }

    /// Creates an invalid numeric parameter error.
    pub fn invalid_numeric(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumericParameter {
            name,
            value: value.into(),
        }
    }
}

impl BackendError for ParamError {
    fn code(&self) -> &'static str {
        match self {
            ParamError::InvalidMood { .. } => "PARAM_001",
            ParamError::InvalidNumericParameter { .. } => "PARAM_002",
        }
    }

    fn category(&self) -> &'static str {
        "params"
    }
}
