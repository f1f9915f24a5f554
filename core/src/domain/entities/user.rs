//! User entity representing a registered WordCrafter account.

use serde::{Deserialize, Serialize};

/// Maximum username length accepted by the `users` table
pub const USERNAME_MAX_LENGTH: usize = 50;

/// Role of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Builds words and earns points
    Player,
    /// Maintains the morpheme and word dictionary
    Admin,
}

impl UserRole {
    /// Value stored in the `role` column
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Player => "PLAYER",
            UserRole::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PLAYER" => Ok(UserRole::Player),
            "ADMIN" => Ok(UserRole::Admin),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Database identifier
    pub id: i64,

    /// Unique login name
    pub username: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub role: UserRole,

    /// Accumulated points
    pub score: i64,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_player(&self) -> bool {
        self.role == UserRole::Player
    }

    /// Snapshot of this user's score
    pub fn player_score(&self) -> PlayerScore {
        PlayerScore::new(self.id, self.score)
    }

    /// Copy of this user with `points` added to the score
    pub fn add_points(&self, points: i64) -> User {
        User {
            score: self.score + points,
            ..self.clone()
        }
    }
}

/// Input for creating a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
}

impl NewUser {
    pub fn player(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            role: UserRole::Player,
        }
    }

    pub fn admin(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            role: UserRole::Admin,
        }
    }
}

/// Immutable pairing of a player and their points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub user_id: i64,
    pub points: i64,
}

impl PlayerScore {
    pub fn new(user_id: i64, points: i64) -> Self {
        Self { user_id, points }
    }

    pub fn with_additional_points(&self, points: i64) -> Self {
        Self::new(self.user_id, self.points + points)
    }
}
