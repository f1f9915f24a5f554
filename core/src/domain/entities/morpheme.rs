//! Morpheme entity: the building block players combine into words.

use serde::{Deserialize, Serialize};

/// Maximum morpheme text length accepted by the `morphemes` table
pub const MORPHEME_TEXT_MAX_LENGTH: usize = 100;

/// A prefix, root or suffix such as `re`, `faire` or `tion`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Morpheme {
    pub id: i64,
    pub text: String,
    /// Short meaning, used to judge free-build definitions
    pub definition: String,
}

impl Morpheme {
    pub fn new(id: i64, text: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            definition: definition.into(),
        }
    }
}

impl std::fmt::Display for Morpheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Input for creating a morpheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMorpheme {
    pub text: String,
    pub definition: String,
}

impl NewMorpheme {
    pub fn new(text: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            definition: definition.into(),
        }
    }
}
