//! Word repository trait: the dictionary and the words each player found.

use async_trait::async_trait;

use crate::domain::entities::word::{NewWord, Word};
use crate::errors::DomainError;

/// Repository trait for word persistence
#[async_trait]
pub trait WordRepository: Send + Sync {
    /// Find a word by spelling, with its ordered morpheme ids
    async fn find_by_text(&self, text: &str) -> Result<Option<Word>, DomainError>;

    /// Every word ordered by id
    async fn list_all(&self) -> Result<Vec<Word>, DomainError>;

    /// Insert a word and its decomposition atomically
    ///
    /// # Errors
    /// * `ValidationError::DuplicateValue` - A word with the same text exists
    async fn create(&self, word: NewWord) -> Result<Word, DomainError>;

    /// Remember that a player built a word; idempotent
    ///
    /// Returns `true` only when the pair was not recorded before.
    async fn record_player_word(&self, user_id: i64, word_id: i64) -> Result<bool, DomainError>;

    /// Words a player has built, ordered by word id
    async fn list_player_words(&self, user_id: i64) -> Result<Vec<Word>, DomainError>;
}
