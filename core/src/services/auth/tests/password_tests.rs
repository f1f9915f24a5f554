//! Tests for bcrypt helpers

use crate::services::auth::{hash_password, verify_password};

#[tokio::test]
async fn test_hash_and_verify() {
    let hash = hash_password("secret", 4).await.unwrap();
    assert_ne!(hash, "secret");
    assert!(hash.starts_with("$2"));
    assert!(verify_password("secret", &hash).await);
    assert!(!verify_password("Secret", &hash).await);
}

#[tokio::test]
async fn test_malformed_hash_never_matches() {
    assert!(!verify_password("admin", "admin").await);
    assert!(!verify_password("", "").await);
}
