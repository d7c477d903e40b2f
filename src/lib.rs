//! Note Name Dictionary WASM Module
//!
//! Canonical and enharmonic note names for every MIDI pitch (0..=127) under
//! a configurable notation: letter system, accidental style, octave style and
//! default accidental.

pub mod models;
pub mod names;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use names::{build_tables, NoteDictionary, NoteTableGeneration, NoteTableRow, UNKNOWN_NOTE_NAME};
pub use api::NoteNames;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Already initialized if the module is started twice
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Note name dictionary WASM module initialized");
}
