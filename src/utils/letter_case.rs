//! First-letter case helpers for note names
//!
//! Only the first character of a name is ever touched: upper-case letter
//! systems capitalize it, and the German octave style swaps it for low octaves.

/// Upper-case the first character, leaving the rest unchanged ("do" -> "Do")
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Swap the case of the first character ("c" -> "C", "Cis" -> "cis")
pub fn swap_first_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => first.to_lowercase().chain(chars).collect(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("c"), "C");
        assert_eq!(capitalize_first("sol"), "Sol");
        assert_eq!(capitalize_first("Re"), "Re");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_swap_first_case() {
        assert_eq!(swap_first_case("c"), "C");
        assert_eq!(swap_first_case("cis"), "Cis");
        assert_eq!(swap_first_case("Es"), "es");
        assert_eq!(swap_first_case("do-diesis"), "Do-diesis");
        assert_eq!(swap_first_case(""), "");
    }
}
