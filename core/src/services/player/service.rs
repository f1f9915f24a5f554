//! Player progress: stored score and the words a player has found.

use std::sync::Arc;

use crate::domain::entities::user::PlayerScore;
use crate::domain::entities::word::Word;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::{UserRepository, WordRepository};

pub struct PlayerService<U, W>
where
    U: UserRepository,
    W: WordRepository,
{
    user_repository: Arc<U>,
    word_repository: Arc<W>,
}

impl<U, W> PlayerService<U, W>
where
    U: UserRepository,
    W: WordRepository,
{
    pub fn new(user_repository: Arc<U>, word_repository: Arc<W>) -> Self {
        Self {
            user_repository,
            word_repository,
        }
    }

    /// Add points to the stored score
    pub async fn add_score(&self, user_id: i64, points: i64) -> DomainResult<()> {
        self.user_repository.add_score(user_id, points).await
    }

    pub async fn score(&self, user_id: i64) -> DomainResult<PlayerScore> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        Ok(user.player_score())
    }

    /// Dictionary words the player has built at least once
    pub async fn found_words(&self, user_id: i64) -> DomainResult<Vec<Word>> {
        self.word_repository.list_player_words(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::NewUser;
    use crate::domain::entities::word::NewWord;
    use crate::repositories::{MockUserRepository, MockWordRepository};

    #[tokio::test]
    async fn test_score_and_found_words() {
        let users = Arc::new(MockUserRepository::new());
        let words = Arc::new(MockWordRepository::new());
        let service = PlayerService::new(users.clone(), words.clone());

        let alice = users.create(NewUser::player("alice", "h")).await.unwrap();
        let word = words
            .create(NewWord::new("refaire", vec![2, 5], 5, ""))
            .await
            .unwrap();
        words.record_player_word(alice.id, word.id).await.unwrap();

        service.add_score(alice.id, 5).await.unwrap();
        service.add_score(alice.id, 7).await.unwrap();

        assert_eq!(service.score(alice.id).await.unwrap().points, 12);
        let found = service.found_words(alice.id).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "refaire");
    }

    #[tokio::test]
    async fn test_score_of_unknown_player() {
        let service = PlayerService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockWordRepository::new()),
        );
        assert!(service.score(1).await.is_err());
    }
}
