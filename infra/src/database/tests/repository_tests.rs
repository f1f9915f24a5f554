//! SQL repositories against a temporary SQLite file

use wc_core::domain::entities::morpheme::NewMorpheme;
use wc_core::domain::entities::user::{NewUser, UserRole};
use wc_core::domain::entities::word::NewWord;
use wc_core::errors::{AuthError, DomainError, ValidationError};
use wc_core::repositories::{MorphemeRepository, UserRepository, WordRepository};

use super::test_pool;
use crate::database::sql::{SqlMorphemeRepository, SqlUserRepository, SqlWordRepository};

#[tokio::test]
async fn test_user_create_and_find() {
    let dir = tempfile::tempdir().unwrap();
    let users = SqlUserRepository::new(test_pool(&dir).await);

    let created = users.create(NewUser::player("alice", "hash")).await.unwrap();
    assert_eq!(created.score, 0);
    assert_eq!(created.role, UserRole::Player);

    let found = users.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.password_hash, "hash");
    assert_eq!(users.find_by_id(created.id).await.unwrap().unwrap().username, "alice");
    assert!(users.find_by_username("bob").await.unwrap().is_none());
    assert!(users.exists_by_username("alice").await.unwrap());
    assert_eq!(users.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_user_duplicate_username() {
    let dir = tempfile::tempdir().unwrap();
    let users = SqlUserRepository::new(test_pool(&dir).await);

    users.create(NewUser::player("alice", "h")).await.unwrap();
    let result = users.create(NewUser::admin("alice", "h")).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));

    let bob = users.create(NewUser::player("bob", "h")).await.unwrap();
    let result = users.update_username(bob.id, "alice").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));
}

#[tokio::test]
async fn test_user_updates() {
    let dir = tempfile::tempdir().unwrap();
    let users = SqlUserRepository::new(test_pool(&dir).await);
    let user = users.create(NewUser::player("alice", "old")).await.unwrap();

    users.update_username(user.id, "alicia").await.unwrap();
    users.update_password_hash(user.id, "new").await.unwrap();
    users.add_score(user.id, 5).await.unwrap();
    users.add_score(user.id, 3).await.unwrap();

    let stored = users.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(stored.username, "alicia");
    assert_eq!(stored.password_hash, "new");
    assert_eq!(stored.score, 8);

    assert!(matches!(
        users.add_score(999, 1).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        users.update_password_hash(999, "x").await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_morphemes_listed_in_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let morphemes = SqlMorphemeRepository::new(test_pool(&dir).await);

    let re = morphemes.create(NewMorpheme::new("re", "De nouveau")).await.unwrap();
    let de = morphemes.create(NewMorpheme::new("dé", "Enlever")).await.unwrap();

    let all = morphemes.list_all().await.unwrap();
    assert_eq!(all, vec![re.clone(), de]);
    assert_eq!(morphemes.find_by_id(re.id).await.unwrap(), Some(re));
    assert!(morphemes.find_by_id(42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_word_keeps_morpheme_order() {
    let dir = tempfile::tempdir().unwrap();
    let pool = test_pool(&dir).await;
    let morphemes = SqlMorphemeRepository::new(pool.clone());
    let words = SqlWordRepository::new(pool);

    let faire = morphemes.create(NewMorpheme::new("faire", "Accomplir")).await.unwrap();
    let re = morphemes.create(NewMorpheme::new("re", "De nouveau")).await.unwrap();

    let created = words
        .create(NewWord::new("refaire", vec![re.id, faire.id], 5, "Faire de nouveau"))
        .await
        .unwrap();

    let found = words.find_by_text("refaire").await.unwrap().unwrap();
    assert_eq!(found, created);
    assert_eq!(found.morpheme_ids, vec![re.id, faire.id]);
    assert!(words.find_by_text("fairere").await.unwrap().is_none());

    let all = words.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].morpheme_ids, vec![re.id, faire.id]);
}

#[tokio::test]
async fn test_word_duplicate_text() {
    let dir = tempfile::tempdir().unwrap();
    let pool = test_pool(&dir).await;
    let morphemes = SqlMorphemeRepository::new(pool.clone());
    let words = SqlWordRepository::new(pool);
    let voir = morphemes.create(NewMorpheme::new("voir", "Percevoir")).await.unwrap();

    words
        .create(NewWord::new("voir", vec![voir.id], 1, "Percevoir"))
        .await
        .unwrap();
    let result = words
        .create(NewWord::new("voir", vec![voir.id], 2, "Autre"))
        .await;

    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::DuplicateValue { .. }))
    ));
    assert_eq!(words.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_player_words_recorded_once_and_removed_with_user() {
    let dir = tempfile::tempdir().unwrap();
    let pool = test_pool(&dir).await;
    let users = SqlUserRepository::new(pool.clone());
    let morphemes = SqlMorphemeRepository::new(pool.clone());
    let words = SqlWordRepository::new(pool);

    let alice = users.create(NewUser::player("alice", "h")).await.unwrap();
    let voir = morphemes.create(NewMorpheme::new("voir", "Percevoir")).await.unwrap();
    let word = words
        .create(NewWord::new("voir", vec![voir.id], 1, "Percevoir"))
        .await
        .unwrap();

    assert!(words.record_player_word(alice.id, word.id).await.unwrap());
    assert!(!words.record_player_word(alice.id, word.id).await.unwrap());

    let found = words.list_player_words(alice.id).await.unwrap();
    assert_eq!(found, vec![word]);

    assert!(users.delete(alice.id).await.unwrap());
    assert!(!users.delete(alice.id).await.unwrap());
    assert!(words.list_player_words(alice.id).await.unwrap().is_empty());
    assert_eq!(users.count().await.unwrap(), 0);
}
