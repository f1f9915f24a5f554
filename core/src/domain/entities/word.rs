//! Word entity: a dictionary entry with its exact morpheme decomposition.

use serde::{Deserialize, Serialize};

/// Inclusive bounds for the points an editor may assign to a word
pub const MIN_WORD_POINTS: i64 = 1;
pub const MAX_WORD_POINTS: i64 = 100;

/// A known word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,

    /// Unique spelling, the concatenation of its morphemes
    pub text: String,

    /// Ordered decomposition; position 0 comes first
    pub morpheme_ids: Vec<i64>,

    /// Points awarded when a player builds this word
    pub points: i64,

    pub definition: String,
}

impl Word {
    /// True when `ids` is exactly this word's decomposition, order included
    pub fn is_built_from(&self, ids: &[i64]) -> bool {
        self.morpheme_ids.as_slice() == ids
    }
}

/// Input for creating a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWord {
    pub text: String,
    pub morpheme_ids: Vec<i64>,
    pub points: i64,
    pub definition: String,
}

impl NewWord {
    pub fn new(
        text: impl Into<String>,
        morpheme_ids: Vec<i64>,
        points: i64,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            morpheme_ids,
            points,
            definition: definition.into(),
        }
    }
}
