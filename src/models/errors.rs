//! Error types for note name table construction and configuration
//!
//! Lookups never fail: out-of-range numbers map to a sentinel name and unknown
//! names map to `None`. The errors here are raised only while building a table
//! generation or while reading a notation config.

use thiserror::Error;

/// Errors raised while building note tables or parsing a notation config
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteNameError {
    /// The octave formatter was queried outside -6..=6 (indicates a bug in the builder)
    #[error("octave {0} is outside the supported range -6..=6")]
    InvalidOctave(i32),

    /// A persisted setting value does not name any known variant
    #[error("unknown {setting} value: '{value}'")]
    UnknownSetting {
        setting: &'static str,
        value: String,
    },

    /// Config text (JSON or YAML) could not be deserialized
    #[error("invalid notation config: {0}")]
    ConfigParse(String),
}

impl From<serde_json::Error> for NoteNameError {
    fn from(err: serde_json::Error) -> Self {
        NoteNameError::ConfigParse(err.to_string())
    }
}

impl From<serde_yaml::Error> for NoteNameError {
    fn from(err: serde_yaml::Error) -> Self {
        NoteNameError::ConfigParse(err.to_string())
    }
}
