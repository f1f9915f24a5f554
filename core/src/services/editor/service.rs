//! Editor service: maintains morphemes, words and admin accounts.

use std::sync::Arc;

use wc_shared::validation::{char_len, required};

use crate::domain::entities::morpheme::{Morpheme, NewMorpheme, MORPHEME_TEXT_MAX_LENGTH};
use crate::domain::entities::user::User;
use crate::domain::entities::word::{NewWord, Word, MAX_WORD_POINTS, MIN_WORD_POINTS};
use crate::errors::{DomainResult, ValidationError};
use crate::repositories::{MorphemeRepository, UserRepository, WordRepository};
use crate::services::auth::AuthService;

pub struct EditorService<U, M, W>
where
    U: UserRepository,
    M: MorphemeRepository,
    W: WordRepository,
{
    morpheme_repository: Arc<M>,
    word_repository: Arc<W>,
    auth_service: Arc<AuthService<U>>,
}

impl<U, M, W> EditorService<U, M, W>
where
    U: UserRepository,
    M: MorphemeRepository,
    W: WordRepository,
{
    pub fn new(
        morpheme_repository: Arc<M>,
        word_repository: Arc<W>,
        auth_service: Arc<AuthService<U>>,
    ) -> Self {
        Self {
            morpheme_repository,
            word_repository,
            auth_service,
        }
    }

    pub async fn all_morphemes(&self) -> DomainResult<Vec<Morpheme>> {
        self.morpheme_repository.list_all().await
    }

    pub async fn all_words(&self) -> DomainResult<Vec<Word>> {
        self.word_repository.list_all().await
    }

    pub async fn add_morpheme(&self, text: &str, definition: &str) -> DomainResult<Morpheme> {
        let text = required(text).ok_or_else(|| ValidationError::required("text"))?;
        let definition =
            required(definition).ok_or_else(|| ValidationError::required("definition"))?;
        if char_len(text) > MORPHEME_TEXT_MAX_LENGTH {
            return Err(ValidationError::InvalidFormat {
                field: "text".to_string(),
            }
            .into());
        }

        let morpheme = self
            .morpheme_repository
            .create(NewMorpheme::new(text, definition))
            .await?;
        tracing::info!(morpheme_id = morpheme.id, text = %morpheme.text, "Morpheme added");
        Ok(morpheme)
    }

    /// Add a dictionary word with its ordered decomposition
    pub async fn add_word(
        &self,
        text: &str,
        morpheme_ids: &[i64],
        points: i64,
        definition: &str,
    ) -> DomainResult<Word> {
        let text = required(text).ok_or_else(|| ValidationError::required("text"))?;
        let definition =
            required(definition).ok_or_else(|| ValidationError::required("definition"))?;
        if morpheme_ids.is_empty() {
            return Err(ValidationError::required("morpheme_ids").into());
        }
        if !(MIN_WORD_POINTS..=MAX_WORD_POINTS).contains(&points) {
            return Err(ValidationError::OutOfRange {
                field: "points".to_string(),
                min: MIN_WORD_POINTS,
                max: MAX_WORD_POINTS,
            }
            .into());
        }
        for id in morpheme_ids {
            if self.morpheme_repository.find_by_id(*id).await?.is_none() {
                return Err(ValidationError::InvalidFormat {
                    field: "morpheme_ids".to_string(),
                }
                .into());
            }
        }
        if self.word_repository.find_by_text(text).await?.is_some() {
            return Err(ValidationError::DuplicateValue {
                field: "text".to_string(),
            }
            .into());
        }

        let word = self
            .word_repository
            .create(NewWord::new(text, morpheme_ids.to_vec(), points, definition))
            .await?;
        tracing::info!(word_id = word.id, text = %word.text, points, "Word added");
        Ok(word)
    }

    pub async fn create_admin(
        &self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> DomainResult<User> {
        self.auth_service
            .create_admin(username, password, confirm_password)
            .await
    }
}
