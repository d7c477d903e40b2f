//! Note naming
//!
//! Builds canonical and enharmonic note names for every MIDI number under
//! the active `NotationConfig`. Leaves first:
//!
//! - `exceptions`: conventional spellings for a few German compounds
//! - `base_letters`: natural letters and half tones per letter system
//! - `accidentals`: primary and alternate accidental spellings
//! - `octaves`: octave postfixes per octave style
//! - `builder`: composes the above into a `NoteTableGeneration`
//! - `dictionary`: the lookup facade handed to consumers

pub mod exceptions;
pub mod base_letters;
pub mod accidentals;
pub mod octaves;
pub mod builder;
pub mod dictionary;

pub use accidentals::{AccidentalNamer, AlternateSpelling};
pub use base_letters::BaseLetterTable;
pub use builder::{build_tables, NoteTableGeneration, NoteTableRow, MAX_NOTE};
pub use dictionary::{NoteDictionary, UNKNOWN_NOTE_NAME};
pub use exceptions::canonicalize;
pub use octaves::OctaveFormatter;
