//! Note dictionary facade
//!
//! Owns the active `NoteTableGeneration` and answers name lookups for
//! display code and the note-literal parser. A reconfiguration builds a
//! complete new generation first and then swaps it in; readers hold an
//! `Arc` to whichever generation was current when they asked.
//!
//! Lookups never fail. Numbers outside 0..=127 render as
//! [`UNKNOWN_NOTE_NAME`], unknown names return `None`.

use std::sync::{Arc, PoisonError, RwLock};

use crate::models::{NotationConfig, NoteNameError};
use super::builder::{build_tables, NoteTableGeneration, NoteTableRow};

/// Rendered for numbers outside the MIDI range
pub const UNKNOWN_NOTE_NAME: &str = "?";

#[derive(Debug)]
pub struct NoteDictionary {
    current: RwLock<Arc<NoteTableGeneration>>,
}

impl NoteDictionary {
    pub fn new(config: NotationConfig) -> Result<Self, NoteNameError> {
        let generation = build_tables(&config)?;
        Ok(Self {
            current: RwLock::new(Arc::new(generation)),
        })
    }

    /// Rebuild all tables for `config` and publish them
    ///
    /// On error the previous generation stays active.
    pub fn reconfigure(&self, config: NotationConfig) -> Result<(), NoteNameError> {
        let generation = match build_tables(&config) {
            Ok(generation) => Arc::new(generation),
            Err(e) => {
                log::warn!("Note tables for {} not rebuilt: {}", config, e);
                return Err(e);
            }
        };

        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = generation;
        log::info!("Note naming switched to {}", config);
        Ok(())
    }

    /// The generation current at the time of the call
    pub fn snapshot(&self) -> Arc<NoteTableGeneration> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }

    pub fn config(&self) -> NotationConfig {
        *self.snapshot().config()
    }

    pub fn half_tones(&self) -> Vec<u8> {
        self.snapshot().half_tones().to_vec()
    }

    /// Canonical name, or [`UNKNOWN_NOTE_NAME`] outside 0..=127
    pub fn name_of(&self, number: i32) -> String {
        self.snapshot()
            .name_of(number)
            .unwrap_or(UNKNOWN_NOTE_NAME)
            .to_string()
    }

    pub fn number_of(&self, name: &str) -> Option<u8> {
        self.snapshot().number_of(name)
    }

    /// Sorted non-canonical spellings; empty outside 0..=127
    pub fn alternate_names_of(&self, number: i32) -> Vec<String> {
        self.snapshot()
            .alternate_names_of(number)
            .map(|names| names.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn preferred_accidental_name_of(&self, number: i32, prefer_sharp: bool) -> String {
        self.snapshot()
            .preferred_accidental_name_of(number, prefer_sharp)
            .unwrap_or(UNKNOWN_NOTE_NAME)
            .to_string()
    }

    pub fn base_name_of(&self, number: i32) -> String {
        self.snapshot()
            .base_name_of(number)
            .unwrap_or(UNKNOWN_NOTE_NAME)
            .to_string()
    }

    pub fn octave_of(&self, number: i32) -> Option<i32> {
        self.snapshot().octave_of(number)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.snapshot().exists(name)
    }

    pub fn note_table(&self) -> Vec<NoteTableRow> {
        self.snapshot().note_table()
    }
}
