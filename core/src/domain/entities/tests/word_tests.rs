//! Unit tests for morpheme and word entities

use crate::domain::entities::morpheme::Morpheme;
use crate::domain::entities::word::Word;

#[test]
fn test_morpheme_displays_as_text() {
    let morpheme = Morpheme::new(2, "re", "De nouveau ou en arrière");
    assert_eq!(morpheme.to_string(), "re");
    assert_eq!(morpheme, Morpheme::new(2, "re", "De nouveau ou en arrière"));
}

#[test]
fn test_word_decomposition_is_ordered() {
    let word = Word {
        id: 1,
        text: "refaire".to_string(),
        morpheme_ids: vec![2, 5],
        points: 5,
        definition: String::new(),
    };

    assert!(word.is_built_from(&[2, 5]));
    assert!(!word.is_built_from(&[5, 2]));
    assert!(!word.is_built_from(&[2]));
    assert!(!word.is_built_from(&[2, 5, 5]));
}
