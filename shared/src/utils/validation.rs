//! Common text validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Separators between definition words: whitespace and `. , ; : ! ?`
static TOKEN_SEPARATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s.,;:!?]+").expect("valid separator pattern")
});

/// Check if a string has any non-whitespace content
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Length in characters, not bytes (`"dé"` has length 2)
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Check if a string length in characters is within bounds (inclusive)
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = char_len(value);
    len >= min && len <= max
}

/// Trim a value and reject it when nothing is left
pub fn required(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Lower-case, trim and split a free-text definition into words.
///
/// Empty fragments are dropped, so `"Faire, de nouveau."` yields
/// `["faire", "de", "nouveau"]`.
pub fn tokenize_definition(text: &str) -> Vec<String> {
    let lowered = text.trim().to_lowercase();
    TOKEN_SEPARATOR
        .split(&lowered)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("re"));
        assert!(!not_blank("   "));
        assert!(!not_blank(""));
    }

    #[test]
    fn test_char_len_counts_accents_once() {
        assert_eq!(char_len("dé"), 2);
        assert_eq!(char_len("prévoir"), 7);
        assert!(length_between("bob", 3, 50));
        assert!(!length_between("bo", 3, 50));
    }

    #[test]
    fn test_required_trims() {
        assert_eq!(required("  alice "), Some("alice"));
        assert_eq!(required(" \t"), None);
    }

    #[test]
    fn test_tokenize_definition() {
        assert_eq!(
            tokenize_definition("  Faire de nouveau, recommencer une action. "),
            vec!["faire", "de", "nouveau", "recommencer", "une", "action"]
        );
        assert_eq!(tokenize_definition("Capable d'être"), vec!["capable", "d'être"]);
        assert!(tokenize_definition(" ?! ").is_empty());
    }
}
