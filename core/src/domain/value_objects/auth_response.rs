//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::{User, UserRole};

/// Public view of an account, safe to return to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub role: UserRole,
    pub score: i64,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
            score: user.score,
        }
    }
}

/// Authentication response containing the access token and the account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// Always `"Bearer"`
    pub token_type: String,

    /// Access token expiration time in seconds
    pub expires_in: i64,

    pub user: UserSummary,
}

impl AuthResponse {
    pub fn new(access_token: String, expires_in: i64, user: &User) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user: UserSummary::from(user),
        }
    }
}
