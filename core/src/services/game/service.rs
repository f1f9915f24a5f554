//! Game catalog: morphemes, dictionary lookups and found-word records.

use std::sync::Arc;

use crate::domain::entities::morpheme::Morpheme;
use crate::domain::entities::word::Word;
use crate::errors::DomainResult;
use crate::repositories::{MorphemeRepository, WordRepository};

/// Read access to the morpheme catalog and the word dictionary
pub struct GameService<M, W>
where
    M: MorphemeRepository,
    W: WordRepository,
{
    morpheme_repository: Arc<M>,
    word_repository: Arc<W>,
}

impl<M, W> GameService<M, W>
where
    M: MorphemeRepository,
    W: WordRepository,
{
    pub fn new(morpheme_repository: Arc<M>, word_repository: Arc<W>) -> Self {
        Self {
            morpheme_repository,
            word_repository,
        }
    }

    pub async fn available_morphemes(&self) -> DomainResult<Vec<Morpheme>> {
        self.morpheme_repository.list_all().await
    }

    pub async fn available_words(&self) -> DomainResult<Vec<Word>> {
        self.word_repository.list_all().await
    }

    pub async fn find_morpheme(&self, id: i64) -> DomainResult<Option<Morpheme>> {
        self.morpheme_repository.find_by_id(id).await
    }

    /// Look up a candidate word
    ///
    /// The text must be a known word AND the ids must be exactly its stored
    /// decomposition: `re + faire` is `refaire`, `ref + aire` is not.
    pub async fn validate_word(&self, text: &str, morpheme_ids: &[i64]) -> DomainResult<Option<Word>> {
        let word = self.word_repository.find_by_text(text).await?;
        Ok(word.filter(|w| w.is_built_from(morpheme_ids)))
    }

    /// Remember that a player found a word; returns whether it was new
    pub async fn record_player_word(&self, user_id: i64, word_id: i64) -> DomainResult<bool> {
        self.word_repository.record_player_word(user_id, word_id).await
    }

    pub fn construct_word_text(morphemes: &[Morpheme]) -> String {
        morphemes.iter().map(|m| m.text.as_str()).collect()
    }

    pub fn extract_morpheme_ids(morphemes: &[Morpheme]) -> Vec<i64> {
        morphemes.iter().map(|m| m.id).collect()
    }
}
