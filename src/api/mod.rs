//! Note name dictionary WASM API
//!
//! This module provides the JavaScript-facing API.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging, serialization and error conversion
//! - `notes`: The `NoteNames` class wrapping a `NoteDictionary`

pub mod helpers;
pub mod notes;

pub use notes::{NoteNames, NOT_FOUND};
