//! Tests for JWT generation and verification

use jsonwebtoken::{encode, EncodingKey, Header};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::{User, UserRole};
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn config() -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        ..Default::default()
    }
}

fn admin() -> User {
    User {
        id: 1,
        username: "admin".to_string(),
        password_hash: String::new(),
        role: UserRole::Admin,
        score: 0,
    }
}

#[test]
fn test_generate_and_verify_token() {
    let service = TokenService::new(config());
    let token = service.generate_access_token(&admin()).unwrap();

    let claims = service.verify_access_token(&token).unwrap();
    assert_eq!(claims.user_id().unwrap(), 1);
    assert_eq!(claims.username, "admin");
    assert_eq!(claims.role, UserRole::Admin);
    assert_eq!(claims.iss, "wordcrafter");
    assert_eq!(claims.aud, "wordcrafter-api");
}

#[test]
fn test_expired_token() {
    let service = TokenService::new(TokenServiceConfig {
        access_token_expiry_seconds: -120,
        ..config()
    });
    let token = service.generate_access_token(&admin()).unwrap();

    let result = service.verify_access_token(&token);
    assert!(matches!(result, Err(DomainError::Token(TokenError::TokenExpired))));
}

#[test]
fn test_wrong_secret_is_invalid_signature() {
    let issuer = TokenService::new(config());
    let verifier = TokenService::new(TokenServiceConfig {
        jwt_secret: "another-secret".to_string(),
        ..config()
    });
    let token = issuer.generate_access_token(&admin()).unwrap();

    let result = verifier.verify_access_token(&token);
    assert!(matches!(result, Err(DomainError::Token(TokenError::InvalidSignature))));
}

#[test]
fn test_wrong_audience_is_invalid_claims() {
    let issuer = TokenService::new(TokenServiceConfig {
        audience: "someone-else".to_string(),
        ..config()
    });
    let verifier = TokenService::new(config());
    let token = issuer.generate_access_token(&admin()).unwrap();

    let result = verifier.verify_access_token(&token);
    assert!(matches!(result, Err(DomainError::Token(TokenError::InvalidClaims))));
}

#[test]
fn test_garbage_is_invalid_format() {
    let service = TokenService::new(config());
    let result = service.verify_access_token("not-a-jwt");
    assert!(matches!(result, Err(DomainError::Token(TokenError::InvalidTokenFormat))));
}

#[test]
fn test_non_numeric_subject_is_invalid_claims() {
    let service = TokenService::new(config());
    let mut claims = Claims::for_user(&admin(), 600, "wordcrafter", "wordcrafter-api");
    claims.sub = "not-a-number".to_string();
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .unwrap();

    let result = service.verify_access_token(&token);
    assert!(matches!(result, Err(DomainError::Token(TokenError::InvalidClaims))));
}
