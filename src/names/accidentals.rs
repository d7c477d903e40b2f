//! Accidental spellings
//!
//! Two products per configuration:
//!
//! - the primary spelling of each pitch class: its natural letter, or for a
//!   half tone the neighbouring letter plus the default accidental
//!   (`c#` with sharps, `db` with flats)
//! - alternate spellings: each primary spelling with one, two and three
//!   further sharps or flats appended (`c#`, `c##`, `c###`)

use serde::Serialize;

use crate::models::{AccidentalDirection, AccidentalStyle};
use super::base_letters::BaseLetterTable;
use super::exceptions::canonicalize;

/// Number of accidental levels generated per starting spelling
pub const MAX_STRENGTH: u8 = 3;

/// (sharp suffix, flat suffix) for an accidental style
pub fn suffix_pair(style: AccidentalStyle) -> (&'static str, &'static str) {
    match style {
        AccidentalStyle::SharpFlatAscii => ("#", "b"),
        AccidentalStyle::DiesisBemolle => ("-diesis", "-bemolle"),
        AccidentalStyle::CisEs => ("is", "es"),
    }
}

/// One generated alternate spelling, without octave
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct AlternateSpelling {
    /// Pitch class the spelling sounds at
    pub pitch_class: u8,
    pub name: String,
    pub direction: AccidentalDirection,
    /// How many suffixes were appended to the primary spelling (1..=3)
    pub strength: u8,
}

/// Primary and alternate accidental spellings for one configuration
#[derive(Debug, Clone)]
pub struct AccidentalNamer {
    sharp_suffix: &'static str,
    flat_suffix: &'static str,
    primary: [String; 12],
    alternates: Vec<AlternateSpelling>,
}

impl AccidentalNamer {
    pub fn new(
        letters: &BaseLetterTable,
        style: AccidentalStyle,
        default_accidental: AccidentalDirection,
    ) -> Self {
        let (sharp_suffix, flat_suffix) = suffix_pair(style);
        let mut namer = Self {
            sharp_suffix,
            flat_suffix,
            primary: Default::default(),
            alternates: Vec::new(),
        };

        for pc in 0..12u8 {
            let spelling = match letters.letter(pc) {
                Some(letter) => letter.to_string(),
                None => namer
                    .canonical_accidental_name(letters, default_accidental, pc)
                    .unwrap_or_default(),
            };
            namer.primary[pc as usize] = spelling;
        }

        namer.alternates = namer.generate_alternates(letters, default_accidental);
        namer
    }

    pub fn suffix(&self, direction: AccidentalDirection) -> &'static str {
        match direction {
            AccidentalDirection::Sharp => self.sharp_suffix,
            AccidentalDirection::Flat => self.flat_suffix,
        }
    }

    /// Spelling of a half tone using the default accidental
    ///
    /// A sharp is written on the letter below, a flat on the letter above.
    /// Returns `None` if that neighbour has no natural letter, which cannot
    /// happen for the built-in letter systems.
    pub fn canonical_accidental_name(
        &self,
        letters: &BaseLetterTable,
        default_accidental: AccidentalDirection,
        pitch_class: u8,
    ) -> Option<String> {
        let base = (pitch_class as i32 - default_accidental.step()).rem_euclid(12) as u8;
        let letter = letters.letter(base)?;
        Some(canonicalize(&format!("{}{}", letter, self.suffix(default_accidental))))
    }

    /// Natural letter or default-accidental spelling of a pitch class
    pub fn primary(&self, pitch_class: u8) -> &str {
        &self.primary[(pitch_class % 12) as usize]
    }

    /// All generated alternates, in generation order
    pub fn alternates(&self) -> &[AlternateSpelling] {
        &self.alternates
    }

    fn generate_alternates(
        &self,
        letters: &BaseLetterTable,
        default_accidental: AccidentalDirection,
    ) -> Vec<AlternateSpelling> {
        let mut alternates = Vec::new();

        for direction in AccidentalDirection::ALL {
            let suffix = self.suffix(direction);

            for pc in 0..12u8 {
                // A half tone is only extended in its own accidental's direction
                if letters.is_half_tone(pc) && direction != default_accidental {
                    continue;
                }

                let mut name = self.primary(pc).to_string();
                let mut running = pc as i32;
                for strength in 1..=MAX_STRENGTH {
                    name.push_str(suffix);
                    running += direction.step();
                    name = canonicalize(&name);
                    alternates.push(AlternateSpelling {
                        pitch_class: running.rem_euclid(12) as u8,
                        name: name.clone(),
                        direction,
                        strength,
                    });
                }
            }
        }

        alternates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LetterSystem;

    fn namer(system: LetterSystem, style: AccidentalStyle, default: AccidentalDirection) -> AccidentalNamer {
        AccidentalNamer::new(&BaseLetterTable::new(system), style, default)
    }

    fn find<'a>(namer: &'a AccidentalNamer, name: &str) -> Vec<&'a AlternateSpelling> {
        namer.alternates().iter().filter(|a| a.name == name).collect()
    }

    #[test]
    fn test_primary_sharps() {
        let namer = namer(LetterSystem::IntlLower, AccidentalStyle::SharpFlatAscii, AccidentalDirection::Sharp);
        let primaries: Vec<&str> = (0..12).map(|pc| namer.primary(pc)).collect();
        assert_eq!(
            primaries,
            vec!["c", "c#", "d", "d#", "e", "f", "f#", "g", "g#", "a", "a#", "b"]
        );
    }

    #[test]
    fn test_primary_flats() {
        let namer = namer(LetterSystem::IntlLower, AccidentalStyle::SharpFlatAscii, AccidentalDirection::Flat);
        let primaries: Vec<&str> = (0..12).map(|pc| namer.primary(pc)).collect();
        assert_eq!(
            primaries,
            vec!["c", "db", "d", "eb", "e", "f", "gb", "g", "ab", "a", "bb", "b"]
        );
    }

    #[test]
    fn test_primary_german_flats_use_exceptions() {
        let namer = namer(LetterSystem::GermanLower, AccidentalStyle::CisEs, AccidentalDirection::Flat);
        assert_eq!(namer.primary(1), "des");
        assert_eq!(namer.primary(3), "es");
        assert_eq!(namer.primary(6), "ges");
        assert_eq!(namer.primary(8), "as");
        assert_eq!(namer.primary(10), "b");
        assert_eq!(namer.primary(11), "h");
    }

    #[test]
    fn test_primary_italian() {
        let namer = namer(LetterSystem::ItalianLower, AccidentalStyle::DiesisBemolle, AccidentalDirection::Sharp);
        assert_eq!(namer.primary(1), "do-diesis");
        assert_eq!(namer.primary(10), "la-diesis");
    }

    #[test]
    fn test_three_strengths_retained() {
        let namer = namer(LetterSystem::IntlLower, AccidentalStyle::SharpFlatAscii, AccidentalDirection::Sharp);
        let c_sharps: Vec<(u8, u8)> = namer
            .alternates()
            .iter()
            .filter(|a| a.name.starts_with('c') && a.direction == AccidentalDirection::Sharp)
            .map(|a| (a.pitch_class, a.strength))
            .collect();
        // from "c": c#, c##, c###; from "c#": c##, c###, c####
        assert_eq!(c_sharps, vec![(1, 1), (2, 2), (3, 3), (2, 1), (3, 2), (4, 3)]);
    }

    #[test]
    fn test_half_tones_skip_opposite_direction() {
        let namer = namer(LetterSystem::IntlLower, AccidentalStyle::SharpFlatAscii, AccidentalDirection::Sharp);
        // "c#" is never extended with flats
        assert!(find(&namer, "c#b").is_empty());
        assert!(!find(&namer, "c##").is_empty());
    }

    #[test]
    fn test_wraps_around_octave() {
        let namer = namer(LetterSystem::IntlLower, AccidentalStyle::SharpFlatAscii, AccidentalDirection::Sharp);
        let b_sharp = find(&namer, "b#");
        assert_eq!(b_sharp.len(), 1);
        assert_eq!(b_sharp[0].pitch_class, 0);

        let c_flat = find(&namer, "cb");
        assert_eq!(c_flat.len(), 1);
        assert_eq!(c_flat[0].pitch_class, 11);
    }

    #[test]
    fn test_german_flat_exceptions_in_alternates() {
        let namer = namer(LetterSystem::GermanLower, AccidentalStyle::CisEs, AccidentalDirection::Sharp);
        assert!(find(&namer, "aes").is_empty());
        assert!(find(&namer, "ees").is_empty());
        assert!(find(&namer, "hes").is_empty());

        let as_ = find(&namer, "as");
        assert_eq!(as_[0].pitch_class, 8);
        assert_eq!(as_[0].strength, 1);

        // h -> b -> bes -> beses
        let bes = find(&namer, "bes");
        assert!(bes.iter().any(|a| a.pitch_class == 9));
        let beses = find(&namer, "beses");
        assert!(beses.iter().any(|a| a.pitch_class == 8));
    }

    #[test]
    fn test_suffix_pairs() {
        assert_eq!(suffix_pair(AccidentalStyle::SharpFlatAscii), ("#", "b"));
        assert_eq!(suffix_pair(AccidentalStyle::DiesisBemolle), ("-diesis", "-bemolle"));
        assert_eq!(suffix_pair(AccidentalStyle::CisEs), ("is", "es"));
    }
}
