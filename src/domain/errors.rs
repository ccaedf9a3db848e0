//! Domain error types
//!
//! This module defines the error hierarchy for phi-surrogates.
//! All errors are domain-specific and don't expose third-party types.

use crate::surrogate::reference::ListKind;
use thiserror::Error;

/// Main error type
///
/// This is the primary error type used throughout the library. Unrecognized
/// placeholders are never reported through it: they resolve to an empty
/// surrogate by rule.
#[derive(Debug, Error)]
pub enum SurrogateError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A reference list file is missing or unreadable
    #[error("Reference data error: {0}")]
    ReferenceData(String),

    /// A generator tried to sample from a list that holds no candidates
    #[error("Reference list '{0}' is empty but a placeholder requires it")]
    EmptyReferenceList(ListKind),

    /// A recognizer pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl SurrogateError {
    /// Whether this error aborts the whole run rather than a single document
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SurrogateError::Configuration(_)
                | SurrogateError::ReferenceData(_)
                | SurrogateError::Pattern(_)
        )
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for SurrogateError {
    fn from(err: std::io::Error) -> Self {
        SurrogateError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for SurrogateError {
    fn from(err: serde_json::Error) -> Self {
        SurrogateError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SurrogateError {
    fn from(err: toml::de::Error) -> Self {
        SurrogateError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from regex compilation errors
impl From<regex::Error> for SurrogateError {
    fn from(err: regex::Error) -> Self {
        SurrogateError::Pattern(err.to_string())
    }
}
