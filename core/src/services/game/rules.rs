//! Scoring and definition rules shared by the game modes.

use wc_shared::validation::{char_len, tokenize_definition};

use crate::domain::entities::morpheme::Morpheme;
use crate::errors::GameError;

/// Morphemes shown on the main game's 3x3 grid
pub const MAIN_GRID_SIZE: usize = 9;

/// Morpheme definition words shorter than this are ignored when matching
const MIN_KEYWORD_LENGTH: usize = 3;

/// Points for a free-build word of `n` morphemes: `n + (n - 1)²`
///
/// 1 → 1, 2 → 3, 3 → 7, 4 → 13, 5 → 21.
pub fn free_build_points(morpheme_count: usize) -> i64 {
    if morpheme_count == 0 {
        return 0;
    }
    let n = morpheme_count as i64;
    n + (n - 1) * (n - 1)
}

/// Check that a player's definition mentions something from every
/// morpheme's own definition.
///
/// A morpheme keyword and a definition word match when either contains the
/// other, so `recommencer` covers `commencer`.
pub fn validate_definition(definition: &str, morphemes: &[Morpheme]) -> Result<(), GameError> {
    let words = tokenize_definition(definition);

    for morpheme in morphemes {
        let covered = tokenize_definition(&morpheme.definition)
            .iter()
            .filter(|keyword| char_len(keyword) >= MIN_KEYWORD_LENGTH)
            .any(|keyword| {
                words
                    .iter()
                    .any(|word| word.contains(keyword.as_str()) || keyword.contains(word.as_str()))
            });

        if !covered {
            return Err(GameError::DefinitionMismatch {
                morpheme: morpheme.text.clone(),
                definition: morpheme.definition.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn morpheme(text: &str, definition: &str) -> Morpheme {
        Morpheme::new(1, text, definition)
    }

    #[test]
    fn test_free_build_points() {
        let points: Vec<i64> = (0..=5).map(free_build_points).collect();
        assert_eq!(points, vec![0, 1, 3, 7, 13, 21]);
    }

    #[test]
    fn test_definition_covers_every_morpheme() {
        let morphemes = [
            morpheme("re", "De nouveau ou en arrière"),
            morpheme("faire", "Accomplir une action"),
        ];
        assert!(validate_definition("Accomplir de nouveau", &morphemes).is_ok());
        assert!(validate_definition("NOUVEAU: actions!", &morphemes).is_ok());
    }

    #[test]
    fn test_first_uncovered_morpheme_reported() {
        let morphemes = [
            morpheme("re", "De nouveau ou en arrière"),
            morpheme("voir", "Percevoir avec les yeux"),
        ];
        let error = validate_definition("regarder de nouveau", &morphemes).unwrap_err();
        assert_eq!(
            error,
            GameError::DefinitionMismatch {
                morpheme: "voir".to_string(),
                definition: "Percevoir avec les yeux".to_string(),
            }
        );
    }

    #[test]
    fn test_short_keywords_ignored() {
        let morphemes = [morpheme("re", "De nouveau ou en arrière")];
        assert!(validate_definition("de en", &morphemes).is_err());
    }

    #[test]
    fn test_containment_matches_both_ways() {
        let morphemes = [morpheme("voir", "Percevoir avec les yeux")];
        assert!(validate_definition("percevoirs", &morphemes).is_ok());
        assert!(validate_definition("yeu", &morphemes).is_ok());
    }

    #[test]
    fn test_leading_punctuation_does_not_match_everything() {
        let morphemes = [morpheme("pré", "Avant")];
        assert!(validate_definition("...après", &morphemes).is_err());
    }
}
