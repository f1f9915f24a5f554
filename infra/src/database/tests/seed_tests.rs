//! Default data and start-up

use wc_core::domain::entities::user::UserRole;
use wc_core::repositories::{MorphemeRepository, UserRepository, WordRepository};
use wc_core::services::auth::verify_password;

use super::{sqlite_config, test_pool};
use crate::database::seed::{insert_default_data, DEFAULT_ADMIN_PASSWORD};
use crate::database::sql::{SqlMorphemeRepository, SqlUserRepository, SqlWordRepository};
use crate::Infrastructure;

const TEST_COST: u32 = 4;

#[tokio::test]
async fn test_seed_inserts_defaults_once() {
    let dir = tempfile::tempdir().unwrap();
    let pool = test_pool(&dir).await;

    assert!(insert_default_data(&pool, TEST_COST).await.unwrap());
    assert!(!insert_default_data(&pool, TEST_COST).await.unwrap());

    let users = SqlUserRepository::new(pool.clone());
    let admin = users.find_by_username("admin").await.unwrap().unwrap();
    assert_eq!(admin.role, UserRole::Admin);
    assert_eq!(admin.score, 0);
    assert!(verify_password(DEFAULT_ADMIN_PASSWORD, &admin.password_hash).await);
    assert_eq!(users.count().await.unwrap(), 1);

    let morphemes = SqlMorphemeRepository::new(pool.clone()).list_all().await.unwrap();
    let texts: Vec<&str> = morphemes.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["dé", "re", "pré", "jouer", "faire", "voir", "able", "ment", "tion"]
    );

    let words = SqlWordRepository::new(pool);
    let refaire = words.find_by_text("refaire").await.unwrap().unwrap();
    assert_eq!(refaire.morpheme_ids, vec![2, 5]);
    assert_eq!(refaire.points, 5);
    let prevoir = words.find_by_text("prévoir").await.unwrap().unwrap();
    assert_eq!(prevoir.morpheme_ids, vec![3, 6]);
}

#[tokio::test]
async fn test_infrastructure_connect_seeds_when_enabled() {
    let dir = tempfile::tempdir().unwrap();
    let config = sqlite_config(&dir).with_seed_defaults(true);

    let infra = Infrastructure::connect(&config, TEST_COST).await.unwrap();
    assert!(infra.pool().health_check().await.unwrap());
    assert_eq!(infra.word_repository().list_all().await.unwrap().len(), 2);
    assert_eq!(infra.morpheme_repository().list_all().await.unwrap().len(), 9);
    infra.shutdown().await;

    // Reopening keeps the existing rows
    let infra = Infrastructure::connect(&config, TEST_COST).await.unwrap();
    assert_eq!(infra.user_repository().count().await.unwrap(), 1);
    assert_eq!(infra.morpheme_repository().list_all().await.unwrap().len(), 9);
}

#[tokio::test]
async fn test_infrastructure_connect_without_seed() {
    let dir = tempfile::tempdir().unwrap();
    let infra = Infrastructure::connect(&sqlite_config(&dir), TEST_COST)
        .await
        .unwrap();
    assert_eq!(infra.user_repository().count().await.unwrap(), 0);
}
