//! Mock implementation of WordRepository for testing

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::word::{NewWord, Word};
use crate::errors::{DomainError, ValidationError};

use super::trait_::WordRepository;

#[derive(Default)]
struct State {
    words: BTreeMap<i64, Word>,
    /// (user_id, word_id)
    player_words: BTreeSet<(i64, i64)>,
}

/// Mock word repository for testing
#[derive(Clone, Default)]
pub struct MockWordRepository {
    state: Arc<RwLock<State>>,
}

impl MockWordRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WordRepository for MockWordRepository {
    async fn find_by_text(&self, text: &str) -> Result<Option<Word>, DomainError> {
        let state = self.state.read().await;
        Ok(state.words.values().find(|w| w.text == text).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Word>, DomainError> {
        Ok(self.state.read().await.words.values().cloned().collect())
    }

    async fn create(&self, word: NewWord) -> Result<Word, DomainError> {
        let mut state = self.state.write().await;

        if state.words.values().any(|w| w.text == word.text) {
            return Err(ValidationError::DuplicateValue {
                field: "text".to_string(),
            }
            .into());
        }

        let id = state.words.keys().next_back().copied().unwrap_or(0) + 1;
        let created = Word {
            id,
            text: word.text,
            morpheme_ids: word.morpheme_ids,
            points: word.points,
            definition: word.definition,
        };
        state.words.insert(id, created.clone());
        Ok(created)
    }

    async fn record_player_word(&self, user_id: i64, word_id: i64) -> Result<bool, DomainError> {
        Ok(self.state.write().await.player_words.insert((user_id, word_id)))
    }

    async fn list_player_words(&self, user_id: i64) -> Result<Vec<Word>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .player_words
            .iter()
            .filter(|(user, _)| *user == user_id)
            .filter_map(|(_, word_id)| state.words.get(word_id).cloned())
            .collect())
    }
}
