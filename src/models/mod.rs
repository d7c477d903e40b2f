//! Models module for the note name dictionary
//!
//! This module contains the notation configuration consumed by the
//! table builder and the error types shared across the crate.

pub mod errors;
pub mod notation_config;

// Re-export commonly used types
pub use errors::NoteNameError;
pub use notation_config::{
    AccidentalDirection, AccidentalStyle, LetterFamily, LetterSystem, NotationConfig, OctaveStyle,
};
