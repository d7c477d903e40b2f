//! Note table construction
//!
//! `build_tables` turns a `NotationConfig` into an immutable
//! `NoteTableGeneration`: canonical names for MIDI 0..=127, the enharmonic
//! alternates of each number, and one merged name -> number index.
//!
//! Canonical names are inserted first; an alternate is dropped if its full
//! name (octave included) is already indexed.

use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use std::ops::RangeInclusive;

use crate::models::{AccidentalDirection, NotationConfig, NoteNameError};
use super::accidentals::{AccidentalNamer, AlternateSpelling};
use super::base_letters::BaseLetterTable;
use super::octaves::OctaveFormatter;

pub const MAX_NOTE: u8 = 127;
pub const NOTE_COUNT: usize = MAX_NOTE as usize + 1;

/// Octave of MIDI note 0
pub const CANONICAL_ORIGIN_OCTAVE: i32 = -5;

/// Octaves alternates are placed in. Stops one short of the formatter's top
/// octave; octave 5 already reaches past 127.
pub const ALTERNATE_OCTAVES: RangeInclusive<i32> = -6..=5;

/// MIDI number of octave 0, pitch class 0
pub const MIDDLE_C: i32 = 60;

/// One row of the note overview table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteTableRow {
    pub number: u8,
    pub name: String,
    pub alternates: Vec<String>,
}

/// All derived tables for one notation config
///
/// Never mutated after construction; a config change builds a new generation.
#[derive(Debug, Clone)]
pub struct NoteTableGeneration {
    config: NotationConfig,
    half_tones: Vec<u8>,
    base_names: [String; 12],
    canonical: Vec<String>,
    name_index: HashMap<String, u8>,
    alternates: Vec<BTreeSet<String>>,
    pitch_class_alternates: [BTreeSet<AlternateSpelling>; 12],
}

/// Build every table for `config`
pub fn build_tables(config: &NotationConfig) -> Result<NoteTableGeneration, NoteNameError> {
    let letters = BaseLetterTable::new(config.letter_system);
    let namer = AccidentalNamer::new(&letters, config.accidental_style, config.default_accidental);
    let octaves = OctaveFormatter::new(config.octave_style);

    // Canonical names, walking pitch classes from the origin octave upwards
    let mut canonical = Vec::with_capacity(NOTE_COUNT);
    let mut name_index = HashMap::new();
    let mut pitch_class = 0u8;
    let mut octave = CANONICAL_ORIGIN_OCTAVE;
    for number in 0..=MAX_NOTE {
        let name = octaves.decorate(namer.primary(pitch_class), octave)?;
        let previous = name_index.insert(name.clone(), number);
        debug_assert!(previous.is_none(), "canonical name '{}' is not unique", name);
        canonical.push(name);

        pitch_class += 1;
        if pitch_class == 12 {
            pitch_class = 0;
            octave += 1;
        }
    }

    // Alternates, anchored at middle C = octave 0
    let mut alternates = vec![BTreeSet::new(); NOTE_COUNT];
    let mut pitch_class_alternates: [BTreeSet<AlternateSpelling>; 12] = Default::default();
    for octave in ALTERNATE_OCTAVES {
        for spelling in namer.alternates() {
            let number = octave * 12 + MIDDLE_C + spelling.pitch_class as i32;
            if !(0..=MAX_NOTE as i32).contains(&number) {
                continue;
            }

            let name = octaves.decorate(&spelling.name, octave)?;
            match name_index.entry(name) {
                Entry::Occupied(_) => continue,
                Entry::Vacant(entry) => {
                    alternates[number as usize].insert(entry.key().clone());
                    entry.insert(number as u8);
                }
            }
            pitch_class_alternates[spelling.pitch_class as usize].insert(spelling.clone());
        }
    }

    let base_names = std::array::from_fn(|pc| namer.primary(pc as u8).to_string());

    log::debug!(
        "Built note tables for {}: {} canonical names, {} alternates",
        config,
        canonical.len(),
        name_index.len() - canonical.len()
    );

    Ok(NoteTableGeneration {
        config: *config,
        half_tones: letters.half_tones().to_vec(),
        base_names,
        canonical,
        name_index,
        alternates,
        pitch_class_alternates,
    })
}

/// Index into the per-number tables, `None` outside 0..=127
fn note_index(number: i32) -> Option<usize> {
    if (0..=MAX_NOTE as i32).contains(&number) {
        Some(number as usize)
    } else {
        None
    }
}

impl NoteTableGeneration {
    pub fn config(&self) -> &NotationConfig {
        &self.config
    }

    pub fn half_tones(&self) -> &[u8] {
        &self.half_tones
    }

    pub fn name_of(&self, number: i32) -> Option<&str> {
        note_index(number).map(|n| self.canonical[n].as_str())
    }

    pub fn number_of(&self, name: &str) -> Option<u8> {
        self.name_index.get(name).copied()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.name_index.contains_key(name)
    }

    /// Non-canonical spellings of a number, sorted
    pub fn alternate_names_of(&self, number: i32) -> Option<&BTreeSet<String>> {
        note_index(number).map(|n| &self.alternates[n])
    }

    /// Letter plus primary accidental, without octave
    pub fn base_name_of(&self, number: i32) -> Option<&str> {
        note_index(number).map(|n| self.base_names[n % 12].as_str())
    }

    /// Octave of a number, -5 for MIDI 0 up to 5 for MIDI 120..=127
    pub fn octave_of(&self, number: i32) -> Option<i32> {
        note_index(number).map(|n| CANONICAL_ORIGIN_OCTAVE + (n / 12) as i32)
    }

    /// Octave-less spelling using a single sharp or flat
    ///
    /// Returns the lexicographically first accepted strength-1 alternate of
    /// the pitch class in the requested direction, falling back to its
    /// primary spelling. Naturals are searched too (`fb` for e with flats).
    pub fn preferred_accidental_name_of(&self, number: i32, prefer_sharp: bool) -> Option<&str> {
        let pc = note_index(number)? % 12;
        let primary = self.base_names[pc].as_str();

        let direction = if prefer_sharp {
            AccidentalDirection::Sharp
        } else {
            AccidentalDirection::Flat
        };

        let preferred = self.pitch_class_alternates[pc]
            .iter()
            .filter(|spelling| spelling.strength == 1 && spelling.direction == direction)
            .map(|spelling| spelling.name.as_str())
            .min();

        Some(preferred.unwrap_or(primary))
    }

    /// Accepted alternate spellings of a pitch class, without octave
    pub fn pitch_class_alternates(&self, pitch_class: u8) -> Option<&BTreeSet<AlternateSpelling>> {
        self.pitch_class_alternates.get(pitch_class as usize)
    }

    /// Number of names (canonical and alternate) in the merged index
    pub fn name_count(&self) -> usize {
        self.name_index.len()
    }

    pub fn note_table(&self) -> Vec<NoteTableRow> {
        self.canonical
            .iter()
            .zip(&self.alternates)
            .enumerate()
            .map(|(number, (name, alternates))| NoteTableRow {
                number: number as u8,
                name: name.clone(),
                alternates: alternates.iter().cloned().collect(),
            })
            .collect()
    }
}
