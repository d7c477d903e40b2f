//! Natural note letters per letter system
//!
//! International and Italian systems name seven pitch classes, leaving five
//! half tones. The German system also names pitch class 10 ("b", with "h"
//! at 11), so only four half tones remain.

use crate::models::{LetterFamily, LetterSystem};
use crate::utils::capitalize_first;

const INTERNATIONAL: [(u8, &str); 7] = [
    (0, "c"),
    (2, "d"),
    (4, "e"),
    (5, "f"),
    (7, "g"),
    (9, "a"),
    (11, "b"),
];

const ITALIAN: [(u8, &str); 7] = [
    (0, "do"),
    (2, "re"),
    (4, "mi"),
    (5, "fa"),
    (7, "sol"),
    (9, "la"),
    (11, "si"),
];

const GERMAN: [(u8, &str); 8] = [
    (0, "c"),
    (2, "d"),
    (4, "e"),
    (5, "f"),
    (7, "g"),
    (9, "a"),
    (10, "b"),
    (11, "h"),
];

/// Pitch class -> natural letter, plus the half tones left without one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseLetterTable {
    letters: [Option<String>; 12],
    half_tones: Vec<u8>,
}

impl BaseLetterTable {
    pub fn new(system: LetterSystem) -> Self {
        let naturals: &[(u8, &str)] = match system.family() {
            LetterFamily::International => &INTERNATIONAL,
            LetterFamily::Italian => &ITALIAN,
            LetterFamily::German => &GERMAN,
        };

        let mut letters: [Option<String>; 12] = Default::default();
        for &(pitch_class, letter) in naturals {
            let letter = if system.is_upper_case() {
                capitalize_first(letter)
            } else {
                letter.to_string()
            };
            letters[pitch_class as usize] = Some(letter);
        }

        let half_tones = (0..12u8)
            .filter(|&pc| letters[pc as usize].is_none())
            .collect();

        Self { letters, half_tones }
    }

    /// Natural letter for a pitch class, `None` for half tones
    pub fn letter(&self, pitch_class: u8) -> Option<&str> {
        self.letters
            .get(pitch_class as usize)
            .and_then(|letter| letter.as_deref())
    }

    /// Pitch classes without a natural letter, ascending
    pub fn half_tones(&self) -> &[u8] {
        &self.half_tones
    }

    pub fn is_half_tone(&self, pitch_class: u8) -> bool {
        self.half_tones.contains(&pitch_class)
    }
}
