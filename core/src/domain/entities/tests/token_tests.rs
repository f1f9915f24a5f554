//! Unit tests for JWT claims

use crate::domain::entities::token::{Claims, JWT_AUDIENCE, JWT_ISSUER};
use crate::domain::entities::user::{User, UserRole};

fn user() -> User {
    User {
        id: 42,
        username: "alice".to_string(),
        password_hash: String::new(),
        role: UserRole::Player,
        score: 0,
    }
}

#[test]
fn test_claims_for_user() {
    let claims = Claims::for_user(&user(), 3600, JWT_ISSUER, JWT_AUDIENCE);

    assert_eq!(claims.sub, "42");
    assert_eq!(claims.user_id().unwrap(), 42);
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.role, UserRole::Player);
    assert_eq!(claims.exp - claims.iat, 3600);
    assert_eq!(claims.nbf, claims.iat);
    assert!(!claims.is_expired());
}

#[test]
fn test_claims_have_unique_ids() {
    let first = Claims::for_user(&user(), 60, JWT_ISSUER, JWT_AUDIENCE);
    let second = Claims::for_user(&user(), 60, JWT_ISSUER, JWT_AUDIENCE);
    assert_ne!(first.jti, second.jti);
}

#[test]
fn test_negative_lifetime_is_expired() {
    let claims = Claims::for_user(&user(), -10, JWT_ISSUER, JWT_AUDIENCE);
    assert!(claims.is_expired());
}
