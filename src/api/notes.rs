//! WASM API for note names
//!
//! `NoteNames` wraps one `NoteDictionary` instance for the JavaScript side.
//! The GUI creates it once with the user's notation settings and passes it
//! to whatever renders or parses note names.

use wasm_bindgen::prelude::*;

use crate::models::NotationConfig;
use crate::names::NoteDictionary;
use crate::{wasm_info, wasm_log, wasm_warn};
use super::helpers::{deserialize, serialize, to_js_error};

/// Returned by `numberOf` for unknown names
pub const NOT_FOUND: i32 = -1;

#[wasm_bindgen]
pub struct NoteNames {
    dictionary: NoteDictionary,
}

/// `undefined`/`null` select the default config, anything else must be a
/// (possibly partial) config object
fn read_config(config_js: JsValue) -> Result<NotationConfig, JsValue> {
    if config_js.is_undefined() || config_js.is_null() {
        return Ok(NotationConfig::default());
    }
    deserialize(config_js, "Invalid notation config")
}

#[wasm_bindgen]
impl NoteNames {
    /// Build note tables for the given config object
    ///
    /// # Parameters
    /// - `config_js`: `{ letter_system, accidental_style, octave_style, default_accidental }`,
    ///   any field may be omitted
    #[wasm_bindgen(constructor)]
    pub fn new(config_js: JsValue) -> Result<NoteNames, JsValue> {
        let config = read_config(config_js)?;
        let names = NoteNames::with_config(config)
            .map_err(|e| to_js_error("Failed to build note tables", e))?;
        wasm_info!("NoteNames created: {}", config);
        Ok(names)
    }

    /// Build note tables from the four persisted setting identifiers
    #[wasm_bindgen(js_name = fromSettings)]
    pub fn from_settings(
        letter_system: &str,
        accidental_style: &str,
        octave_style: &str,
        default_accidental: &str,
    ) -> Result<NoteNames, JsValue> {
        let config = NotationConfig::from_settings(
            letter_system,
            accidental_style,
            octave_style,
            default_accidental,
        )
        .map_err(|e| to_js_error("Invalid notation settings", e))?;
        NoteNames::with_config(config).map_err(|e| to_js_error("Failed to build note tables", e))
    }

    /// Switch to a new config; the old tables stay active on failure
    pub fn reconfigure(&self, config_js: JsValue) -> Result<(), JsValue> {
        let config = read_config(config_js)?;
        wasm_log!("reconfigure: {}", config);
        self.dictionary.reconfigure(config).map_err(|e| {
            wasm_warn!("Keeping previous note tables");
            to_js_error("Failed to rebuild note tables", e)
        })
    }

    /// The active config as a plain object
    pub fn config(&self) -> Result<JsValue, JsValue> {
        serialize(&self.dictionary.config(), "Failed to serialize notation config")
    }

    #[wasm_bindgen(js_name = nameOf)]
    pub fn name_of(&self, number: i32) -> String {
        self.dictionary.name_of(number)
    }

    /// MIDI number of a canonical or alternate name, -1 if unknown
    #[wasm_bindgen(js_name = numberOf)]
    pub fn number_of(&self, name: &str) -> i32 {
        self.dictionary
            .number_of(name)
            .map(i32::from)
            .unwrap_or(NOT_FOUND)
    }

    #[wasm_bindgen(js_name = alternateNamesOf)]
    pub fn alternate_names_of(&self, number: i32) -> js_sys::Array {
        self.dictionary
            .alternate_names_of(number)
            .into_iter()
            .map(JsValue::from)
            .collect()
    }

    #[wasm_bindgen(js_name = preferredAccidentalNameOf)]
    pub fn preferred_accidental_name_of(&self, number: i32, prefer_sharp: bool) -> String {
        self.dictionary.preferred_accidental_name_of(number, prefer_sharp)
    }

    #[wasm_bindgen(js_name = baseNameOf)]
    pub fn base_name_of(&self, number: i32) -> String {
        self.dictionary.base_name_of(number)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.dictionary.exists(name)
    }

    /// All 128 notes as `[{ number, name, alternates }]`
    #[wasm_bindgen(js_name = noteTable)]
    pub fn note_table(&self) -> Result<JsValue, JsValue> {
        serialize(&self.dictionary.note_table(), "Failed to serialize note table")
    }
}

impl NoteNames {
    /// Construct without touching JavaScript (usable from native code and tests)
    pub fn with_config(config: NotationConfig) -> Result<NoteNames, crate::models::NoteNameError> {
        Ok(NoteNames {
            dictionary: NoteDictionary::new(config)?,
        })
    }

    pub fn dictionary(&self) -> &NoteDictionary {
        &self.dictionary
    }
}
