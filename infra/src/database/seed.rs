//! Default data for a fresh database

use wc_core::domain::entities::morpheme::NewMorpheme;
use wc_core::domain::entities::user::NewUser;
use wc_core::domain::entities::word::NewWord;
use wc_core::errors::DomainError;
use wc_core::repositories::{MorphemeRepository, UserRepository, WordRepository};
use wc_core::services::auth::hash_password;

use super::connection::DatabasePool;
use super::sql::{SqlMorphemeRepository, SqlUserRepository, SqlWordRepository};

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// `(text, definition)` in insertion order
pub const DEFAULT_MORPHEMES: [(&str, &str); 9] = [
    ("dé", "Enlever ou inverser"),
    ("re", "De nouveau ou en arrière"),
    ("pré", "Avant"),
    ("jouer", "Pratiquer un jeu ou un divertissement"),
    ("faire", "Accomplir une action"),
    ("voir", "Percevoir avec les yeux"),
    ("able", "Capable d'être"),
    ("ment", "De manière"),
    ("tion", "Action ou procédé"),
];

/// `(text, morpheme texts, points, definition)`
pub const DEFAULT_WORDS: [(&str, [&str; 2], i64, &str); 2] = [
    (
        "refaire",
        ["re", "faire"],
        5,
        "Faire de nouveau, recommencer une action",
    ),
    (
        "prévoir",
        ["pré", "voir"],
        5,
        "Anticiper ou prévoir ce qui va se passer",
    ),
];

/// Insert the default admin, morphemes and words
///
/// Does nothing unless the `users` table is empty. Returns whether data
/// was inserted.
pub async fn insert_default_data(pool: &DatabasePool, bcrypt_cost: u32) -> Result<bool, DomainError> {
    let users = SqlUserRepository::new(pool.clone());
    if users.count().await? > 0 {
        tracing::debug!("Database already populated, skipping default data");
        return Ok(false);
    }

    let password_hash = hash_password(DEFAULT_ADMIN_PASSWORD, bcrypt_cost).await?;
    users
        .create(NewUser::admin(DEFAULT_ADMIN_USERNAME, password_hash))
        .await?;

    let morphemes = SqlMorphemeRepository::new(pool.clone());
    let mut inserted = Vec::with_capacity(DEFAULT_MORPHEMES.len());
    for (text, definition) in DEFAULT_MORPHEMES {
        inserted.push(morphemes.create(NewMorpheme::new(text, definition)).await?);
    }

    let words = SqlWordRepository::new(pool.clone());
    for (text, parts, points, definition) in DEFAULT_WORDS {
        let ids = parts
            .iter()
            .map(|part| {
                inserted
                    .iter()
                    .find(|m| m.text == *part)
                    .map(|m| m.id)
                    .ok_or_else(|| DomainError::internal(format!("unknown morpheme {}", part)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        words.create(NewWord::new(text, ids, points, definition)).await?;
    }

    tracing::warn!(
        username = DEFAULT_ADMIN_USERNAME,
        "Default admin account created; change its password"
    );
    tracing::info!(
        morphemes = DEFAULT_MORPHEMES.len(),
        words = DEFAULT_WORDS.len(),
        "Default data inserted"
    );
    Ok(true)
}
