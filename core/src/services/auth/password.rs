//! bcrypt password hashing

use crate::errors::DomainError;

/// Hash a password with bcrypt on the blocking thread pool
pub async fn hash_password(plain: &str, cost: u32) -> Result<String, DomainError> {
    let plain = plain.to_string();
    tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost))
        .await
        .map_err(DomainError::internal)?
        .map_err(DomainError::internal)
}

/// Check a password against a stored hash
///
/// A malformed hash never matches.
pub async fn verify_password(plain: &str, hash: &str) -> bool {
    let plain = plain.to_string();
    let hash = hash.to_string();
    tokio::task::spawn_blocking(move || bcrypt::verify(plain, &hash).unwrap_or(false))
        .await
        .unwrap_or(false)
}
