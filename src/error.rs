//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Rejected calculator input. Carries the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Steps→Distance called without a positive step count.
    #[error("Please enter the number of steps")]
    MissingStepCount,

    /// Distance→Steps called without a positive distance.
    #[error("Please enter a distance")]
    MissingDistance,

    /// Custom stride selected but the stride is missing or not positive.
    #[error("Please enter your stride length")]
    MissingCustomStride,

    /// Stride derived from height came out as zero or less.
    #[error("Stride length must be greater than zero, check your height")]
    NonPositiveStride,
}

impl ValidationError {
    /// Name of the input field the error refers to.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::MissingStepCount => "step count",
            Self::MissingDistance => "distance",
            Self::MissingCustomStride => "custom stride",
            Self::NonPositiveStride => "height",
        }
    }
}

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// A keyword (activity, unit, mode) that matches no known option
    #[error("Unrecognized {kind}: {value:?}")]
    Unrecognized {
        /// What kind of value was expected.
        kind: &'static str,
        /// The text that failed to match.
        value: String,
    },

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create an error for an unknown keyword
    pub fn unrecognized(kind: &'static str, value: impl Into<String>) -> Self {
        Self::Unrecognized { kind, value: value.into() }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}
