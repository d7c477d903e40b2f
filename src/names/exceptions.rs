//! Exception spellings
//!
//! Appending an accidental suffix to a letter is mechanically correct but
//! produces a few compounds German notation never uses. This table maps those
//! compounds to their conventional spelling. Every generated accidental name
//! passes through `canonicalize` before it reaches an index.

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Whole-name, case-sensitive substitutions. No value is also a key.
    static ref EXCEPTIONS: HashMap<&'static str, &'static str> = {
        let mut table = HashMap::new();
        // flat of h is b
        table.insert("hes", "b");
        table.insert("Hes", "B");
        table.insert("hb", "b");
        table.insert("Hb", "B");
        // flat of e is es
        table.insert("ees", "es");
        table.insert("Ees", "Es");
        // flat of a is as
        table.insert("aes", "as");
        table.insert("Aes", "As");
        table
    };
}

/// Replace an unconventional compound spelling with its conventional form
pub fn canonicalize(name: &str) -> String {
    match EXCEPTIONS.get(name) {
        Some(replacement) => replacement.to_string(),
        None => name.to_string(),
    }
}
