//! Octave postfixes
//!
//! Octave 0 is the octave starting at middle C (MIDI 60). Each style is a
//! fixed table over octaves -6..=6; nothing is computed.

use crate::models::{NoteNameError, OctaveStyle};
use crate::utils::swap_first_case;

pub const MIN_OCTAVE: i32 = -6;
pub const MAX_OCTAVE: i32 = 6;

const PLUS_MINUS_N: [&str; 13] = [
    "-6", "-5", "-4", "-3", "-2", "-", "", "+", "+2", "+3", "+4", "+5", "+6",
];

const PLUS_MINUS: [&str; 13] = [
    "------", "-----", "----", "---", "--", "-", "", "+", "++", "+++", "++++", "+++++", "++++++",
];

/// Scientific pitch numbering: middle C is c4
const INTERNATIONAL: [&str; 13] = [
    "-2", "-1", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10",
];

/// Helmholtz: c' is middle C, c and C carry no mark, commas below C
const GERMAN: [&str; 13] = [
    ",,,,", ",,,", ",,", ",", "", "", "'", "''", "'''", "''''", "'''''", "''''''", "'''''''",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OctaveFormatter {
    style: OctaveStyle,
}

impl OctaveFormatter {
    pub fn new(style: OctaveStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> OctaveStyle {
        self.style
    }

    /// Text appended to a note name for the given octave
    pub fn postfix(&self, octave: i32) -> Result<&'static str, NoteNameError> {
        if !(MIN_OCTAVE..=MAX_OCTAVE).contains(&octave) {
            return Err(NoteNameError::InvalidOctave(octave));
        }

        let table = match self.style {
            OctaveStyle::PlusMinusN => &PLUS_MINUS_N,
            OctaveStyle::PlusMinus => &PLUS_MINUS,
            OctaveStyle::International => &INTERNATIONAL,
            OctaveStyle::German => &GERMAN,
        };

        Ok(table[(octave - MIN_OCTAVE) as usize])
    }

    /// German style writes the two lowest named octaves apart by case:
    /// below octave -1 the first letter's case is swapped.
    pub fn flips_case(&self, octave: i32) -> bool {
        self.style == OctaveStyle::German && octave < -1
    }

    /// Full note name: case flip (if any) plus postfix
    pub fn decorate(&self, name: &str, octave: i32) -> Result<String, NoteNameError> {
        let postfix = self.postfix(octave)?;
        let name = if self.flips_case(octave) {
            swap_first_case(name)
        } else {
            name.to_string()
        };
        Ok(format!("{}{}", name, postfix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_minus_n() {
        let f = OctaveFormatter::new(OctaveStyle::PlusMinusN);
        assert_eq!(f.postfix(0).unwrap(), "");
        assert_eq!(f.postfix(-1).unwrap(), "-");
        assert_eq!(f.postfix(1).unwrap(), "+");
        assert_eq!(f.postfix(-2).unwrap(), "-2");
        assert_eq!(f.postfix(2).unwrap(), "+2");
        assert_eq!(f.postfix(6).unwrap(), "+6");
    }

    #[test]
    fn test_plus_minus() {
        let f = OctaveFormatter::new(OctaveStyle::PlusMinus);
        for octave in MIN_OCTAVE..=MAX_OCTAVE {
            let postfix = f.postfix(octave).unwrap();
            assert_eq!(postfix.len(), octave.unsigned_abs() as usize);
            if octave < 0 {
                assert!(postfix.chars().all(|c| c == '-'));
            } else {
                assert!(postfix.chars().all(|c| c == '+'));
            }
        }
    }

    #[test]
    fn test_international() {
        let f = OctaveFormatter::new(OctaveStyle::International);
        assert_eq!(f.postfix(0).unwrap(), "4");
        assert_eq!(f.postfix(-5).unwrap(), "-1");
        assert_eq!(f.postfix(-6).unwrap(), "-2");
        assert_eq!(f.postfix(6).unwrap(), "10");
    }

    #[test]
    fn test_german() {
        let f = OctaveFormatter::new(OctaveStyle::German);
        assert_eq!(f.postfix(0).unwrap(), "'");
        assert_eq!(f.postfix(1).unwrap(), "''");
        assert_eq!(f.postfix(-1).unwrap(), "");
        assert_eq!(f.postfix(-2).unwrap(), "");
        assert_eq!(f.postfix(-3).unwrap(), ",");
        assert!(f.flips_case(-2));
        assert!(!f.flips_case(-1));
    }

    #[test]
    fn test_german_decorate() {
        let f = OctaveFormatter::new(OctaveStyle::German);
        assert_eq!(f.decorate("c", 0).unwrap(), "c'");
        assert_eq!(f.decorate("c", -1).unwrap(), "c");
        assert_eq!(f.decorate("c", -2).unwrap(), "C");
        assert_eq!(f.decorate("cis", -3).unwrap(), "Cis,");
        // upper-case letters flip the other way
        assert_eq!(f.decorate("C", -2).unwrap(), "c");
    }

    #[test]
    fn test_no_case_flip_outside_german() {
        let f = OctaveFormatter::new(OctaveStyle::PlusMinusN);
        assert!(!f.flips_case(-5));
        assert_eq!(f.decorate("c", -2).unwrap(), "c-2");
    }

    #[test]
    fn test_postfixes_unique_per_style() {
        for style in OctaveStyle::ALL {
            let f = OctaveFormatter::new(style);
            let mut seen = std::collections::HashSet::new();
            for octave in MIN_OCTAVE..=MAX_OCTAVE {
                let decorated = f.decorate("c", octave).unwrap();
                assert!(seen.insert(decorated.clone()), "{} repeats '{}'", style, decorated);
            }
        }
    }

    #[test]
    fn test_invalid_octave() {
        let f = OctaveFormatter::new(OctaveStyle::International);
        assert_eq!(f.postfix(7), Err(NoteNameError::InvalidOctave(7)));
        assert_eq!(f.postfix(-7), Err(NoteNameError::InvalidOctave(-7)));
        assert!(f.decorate("c", 100).is_err());
    }
}
