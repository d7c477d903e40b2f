//! Notation configuration
//!
//! The four independent settings that decide how note names are spelled:
//! which letters name the natural notes, which symbols mark accidentals,
//! how octaves are written, and whether half tones default to sharps or flats.
//!
//! Each setting is a closed enum. The persisted identifiers accepted by
//! `FromStr` are the snake_case names used by serde, plus a few short aliases
//! (e.g. `"#/b"`, `"+n/-n"`) that match the labels shown in the settings UI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::NoteNameError;

// ============================================================================
// Letter system
// ============================================================================

/// Which names are given to the natural notes, and in which case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterSystem {
    /// c, d, e, f, g, a, b
    IntlLower,
    /// C, D, E, F, G, A, B
    IntlUpper,
    /// do, re, mi, fa, sol, la, si
    ItalianLower,
    /// Do, Re, Mi, Fa, Sol, La, Si
    ItalianUpper,
    /// c, d, e, f, g, a, b, h
    GermanLower,
    /// C, D, E, F, G, A, B, H
    GermanUpper,
}

/// Letter family, ignoring case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFamily {
    International,
    Italian,
    German,
}

impl LetterSystem {
    pub const ALL: [LetterSystem; 6] = [
        LetterSystem::IntlLower,
        LetterSystem::IntlUpper,
        LetterSystem::ItalianLower,
        LetterSystem::ItalianUpper,
        LetterSystem::GermanLower,
        LetterSystem::GermanUpper,
    ];

    pub fn family(&self) -> LetterFamily {
        match self {
            LetterSystem::IntlLower | LetterSystem::IntlUpper => LetterFamily::International,
            LetterSystem::ItalianLower | LetterSystem::ItalianUpper => LetterFamily::Italian,
            LetterSystem::GermanLower | LetterSystem::GermanUpper => LetterFamily::German,
        }
    }

    pub fn is_upper_case(&self) -> bool {
        matches!(
            self,
            LetterSystem::IntlUpper | LetterSystem::ItalianUpper | LetterSystem::GermanUpper
        )
    }

    /// Persisted identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterSystem::IntlLower => "intl_lower",
            LetterSystem::IntlUpper => "intl_upper",
            LetterSystem::ItalianLower => "italian_lower",
            LetterSystem::ItalianUpper => "italian_upper",
            LetterSystem::GermanLower => "german_lower",
            LetterSystem::GermanUpper => "german_upper",
        }
    }
}

impl Default for LetterSystem {
    fn default() -> Self {
        LetterSystem::IntlLower
    }
}

impl fmt::Display for LetterSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LetterSystem {
    type Err = NoteNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "intl_lower" | "international_lower" => Ok(LetterSystem::IntlLower),
            "intl_upper" | "international_upper" => Ok(LetterSystem::IntlUpper),
            "italian_lower" => Ok(LetterSystem::ItalianLower),
            "italian_upper" => Ok(LetterSystem::ItalianUpper),
            "german_lower" => Ok(LetterSystem::GermanLower),
            "german_upper" => Ok(LetterSystem::GermanUpper),
            _ => Err(NoteNameError::UnknownSetting {
                setting: "letter system",
                value: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// Accidental style
// ============================================================================

/// Which text marks a sharp or a flat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccidentalStyle {
    /// c#, db
    SharpFlatAscii,
    /// do-diesis, re-bemolle
    DiesisBemolle,
    /// cis, des
    CisEs,
}

impl AccidentalStyle {
    pub const ALL: [AccidentalStyle; 3] = [
        AccidentalStyle::SharpFlatAscii,
        AccidentalStyle::DiesisBemolle,
        AccidentalStyle::CisEs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccidentalStyle::SharpFlatAscii => "sharp_flat_ascii",
            AccidentalStyle::DiesisBemolle => "diesis_bemolle",
            AccidentalStyle::CisEs => "cis_es",
        }
    }
}

impl Default for AccidentalStyle {
    fn default() -> Self {
        AccidentalStyle::SharpFlatAscii
    }
}

impl fmt::Display for AccidentalStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccidentalStyle {
    type Err = NoteNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sharp_flat_ascii" | "#/b" => Ok(AccidentalStyle::SharpFlatAscii),
            "diesis_bemolle" | "-diesis/-bemolle" => Ok(AccidentalStyle::DiesisBemolle),
            "cis_es" | "-is/-es" => Ok(AccidentalStyle::CisEs),
            _ => Err(NoteNameError::UnknownSetting {
                setting: "accidental style",
                value: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// Octave style
// ============================================================================

/// How the octave of a note is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OctaveStyle {
    /// c-2, c-, c, c+, c+2
    PlusMinusN,
    /// c--, c-, c, c+, c++
    PlusMinus,
    /// c2, c3, c4, c5, c6
    International,
    /// C, c, c', c''
    German,
}

impl OctaveStyle {
    pub const ALL: [OctaveStyle; 4] = [
        OctaveStyle::PlusMinusN,
        OctaveStyle::PlusMinus,
        OctaveStyle::International,
        OctaveStyle::German,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OctaveStyle::PlusMinusN => "plus_minus_n",
            OctaveStyle::PlusMinus => "plus_minus",
            OctaveStyle::International => "international",
            OctaveStyle::German => "german",
        }
    }
}

impl Default for OctaveStyle {
    fn default() -> Self {
        OctaveStyle::PlusMinusN
    }
}

impl fmt::Display for OctaveStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OctaveStyle {
    type Err = NoteNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plus_minus_n" | "+n/-n" => Ok(OctaveStyle::PlusMinusN),
            "plus_minus" | "+/-" => Ok(OctaveStyle::PlusMinus),
            "international" | "c4" => Ok(OctaveStyle::International),
            "german" | "c'" => Ok(OctaveStyle::German),
            _ => Err(NoteNameError::UnknownSetting {
                setting: "octave style",
                value: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// Accidental direction
// ============================================================================

/// Sharp (one half tone up) or flat (one half tone down)
///
/// Used both as the configured default accidental for half tones and as the
/// direction in which alternate spellings are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccidentalDirection {
    Sharp,
    Flat,
}

impl AccidentalDirection {
    pub const ALL: [AccidentalDirection; 2] = [AccidentalDirection::Sharp, AccidentalDirection::Flat];

    /// Half-tone step: +1 for sharp, -1 for flat
    pub fn step(&self) -> i32 {
        match self {
            AccidentalDirection::Sharp => 1,
            AccidentalDirection::Flat => -1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccidentalDirection::Sharp => "sharp",
            AccidentalDirection::Flat => "flat",
        }
    }
}

impl Default for AccidentalDirection {
    fn default() -> Self {
        AccidentalDirection::Sharp
    }
}

impl fmt::Display for AccidentalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccidentalDirection {
    type Err = NoteNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sharp" | "#" => Ok(AccidentalDirection::Sharp),
            "flat" | "b" => Ok(AccidentalDirection::Flat),
            _ => Err(NoteNameError::UnknownSetting {
                setting: "default accidental",
                value: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// NotationConfig
// ============================================================================

/// The complete, active note naming configuration
///
/// Missing fields in JSON/YAML input fall back to the defaults
/// (International lower case, `#`/`b`, `+n/-n` octaves, sharps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NotationConfig {
    pub letter_system: LetterSystem,
    pub accidental_style: AccidentalStyle,
    pub octave_style: OctaveStyle,
    pub default_accidental: AccidentalDirection,
}

impl NotationConfig {
    pub fn new(
        letter_system: LetterSystem,
        accidental_style: AccidentalStyle,
        octave_style: OctaveStyle,
        default_accidental: AccidentalDirection,
    ) -> Self {
        Self {
            letter_system,
            accidental_style,
            octave_style,
            default_accidental,
        }
    }

    /// Build a config from the four persisted setting identifiers
    pub fn from_settings(
        letter_system: &str,
        accidental_style: &str,
        octave_style: &str,
        default_accidental: &str,
    ) -> Result<Self, NoteNameError> {
        Ok(Self::new(
            letter_system.parse()?,
            accidental_style.parse()?,
            octave_style.parse()?,
            default_accidental.parse()?,
        ))
    }

    pub fn from_json(text: &str) -> Result<Self, NoteNameError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_yaml(text: &str) -> Result<Self, NoteNameError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, NoteNameError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Every combination of the four settings (6 x 3 x 4 x 2)
    pub fn all() -> Vec<NotationConfig> {
        let mut configs = Vec::new();
        for letter_system in LetterSystem::ALL {
            for accidental_style in AccidentalStyle::ALL {
                for octave_style in OctaveStyle::ALL {
                    for default_accidental in AccidentalDirection::ALL {
                        configs.push(Self::new(
                            letter_system,
                            accidental_style,
                            octave_style,
                            default_accidental,
                        ));
                    }
                }
            }
        }
        configs
    }
}

impl fmt::Display for NotationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.letter_system, self.accidental_style, self.octave_style, self.default_accidental
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NotationConfig::default();
        assert_eq!(config.letter_system, LetterSystem::IntlLower);
        assert_eq!(config.accidental_style, AccidentalStyle::SharpFlatAscii);
        assert_eq!(config.octave_style, OctaveStyle::PlusMinusN);
        assert_eq!(config.default_accidental, AccidentalDirection::Sharp);
    }

    #[test]
    fn test_letter_system_family_and_case() {
        assert_eq!(LetterSystem::GermanUpper.family(), LetterFamily::German);
        assert_eq!(LetterSystem::ItalianLower.family(), LetterFamily::Italian);
        assert!(LetterSystem::IntlUpper.is_upper_case());
        assert!(!LetterSystem::GermanLower.is_upper_case());
    }

    #[test]
    fn test_from_str_identifiers_and_aliases() {
        assert_eq!("german_lower".parse::<LetterSystem>().unwrap(), LetterSystem::GermanLower);
        assert_eq!("Italian_Upper".parse::<LetterSystem>().unwrap(), LetterSystem::ItalianUpper);
        assert_eq!("#/b".parse::<AccidentalStyle>().unwrap(), AccidentalStyle::SharpFlatAscii);
        assert_eq!("-is/-es".parse::<AccidentalStyle>().unwrap(), AccidentalStyle::CisEs);
        assert_eq!("+n/-n".parse::<OctaveStyle>().unwrap(), OctaveStyle::PlusMinusN);
        assert_eq!("c'".parse::<OctaveStyle>().unwrap(), OctaveStyle::German);
        assert_eq!("b".parse::<AccidentalDirection>().unwrap(), AccidentalDirection::Flat);
    }

    #[test]
    fn test_from_str_invalid() {
        let err = "klingon".parse::<LetterSystem>().unwrap_err();
        assert_eq!(
            err,
            NoteNameError::UnknownSetting {
                setting: "letter system",
                value: "klingon".to_string()
            }
        );
        assert!("".parse::<OctaveStyle>().is_err());
        assert!("natural".parse::<AccidentalDirection>().is_err());
    }

    #[test]
    fn test_from_settings() {
        let config = NotationConfig::from_settings("german_lower", "cis_es", "german", "flat").unwrap();
        assert_eq!(config.letter_system, LetterSystem::GermanLower);
        assert_eq!(config.accidental_style, AccidentalStyle::CisEs);
        assert_eq!(config.octave_style, OctaveStyle::German);
        assert_eq!(config.default_accidental, AccidentalDirection::Flat);

        assert!(NotationConfig::from_settings("german_lower", "cis_es", "roman", "flat").is_err());
    }

    #[test]
    fn test_json_partial_uses_defaults() {
        let config = NotationConfig::from_json(r#"{"letter_system":"german_upper"}"#).unwrap();
        assert_eq!(config.letter_system, LetterSystem::GermanUpper);
        assert_eq!(config.octave_style, OctaveStyle::PlusMinusN);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = NotationConfig::new(
            LetterSystem::ItalianUpper,
            AccidentalStyle::DiesisBemolle,
            OctaveStyle::International,
            AccidentalDirection::Flat,
        );
        let json = config.to_json().unwrap();
        assert!(json.contains("\"diesis_bemolle\""));
        assert_eq!(NotationConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_yaml() {
        let yaml = "letter_system: german_lower\naccidental_style: cis_es\ndefault_accidental: flat\n";
        let config = NotationConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.letter_system, LetterSystem::GermanLower);
        assert_eq!(config.default_accidental, AccidentalDirection::Flat);
        assert_eq!(config.octave_style, OctaveStyle::PlusMinusN);
    }

    #[test]
    fn test_invalid_json() {
        let err = NotationConfig::from_json(r#"{"octave_style":"roman"}"#).unwrap_err();
        assert!(matches!(err, NoteNameError::ConfigParse(_)));
    }

    #[test]
    fn test_all_combinations() {
        assert_eq!(NotationConfig::all().len(), 6 * 3 * 4 * 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            NotationConfig::default().to_string(),
            "intl_lower/sharp_flat_ascii/plus_minus_n/sharp"
        );
    }
}
