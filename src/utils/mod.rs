//! Utility modules for the note name dictionary

pub mod letter_case;

pub use letter_case::{capitalize_first, swap_first_case};
