//! Domain-specific error types for authentication, tokens, input validation
//! and gameplay.
//!
//! Messages shown to users are resolved in the presentation layer, keyed by
//! variant; the `Display` text here is for logs.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown username or wrong password; the two are not distinguished
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Insufficient permissions")]
    InsufficientPermissions,

    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Current password supplied for a password change is wrong
    #[error("Incorrect password")]
    IncorrectPassword,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Invalid claims")]
    InvalidClaims,
}

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Too short: {field} (min: {min})")]
    TooShort { field: String, min: usize },

    #[error("Out of range: {field} (min: {min}, max: {max})")]
    OutOfRange { field: String, min: i64, max: i64 },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Duplicate value: {field}")]
    DuplicateValue { field: String },
}

impl ValidationError {
    pub fn required(field: &str) -> Self {
        ValidationError::RequiredField {
            field: field.to_string(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            ValidationError::RequiredField { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field }
            | ValidationError::DuplicateValue { field } => field,
        }
    }
}

/// Gameplay errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("No morpheme selected")]
    EmptySelection,

    #[error("Morpheme {id} is not available in this session")]
    MorphemeNotAvailable { id: i64 },

    #[error("Game session not found")]
    SessionNotFound,

    #[error("A definition is required")]
    DefinitionRequired,

    /// The definition does not relate to one of the selected morphemes
    #[error("Definition does not match morpheme '{morpheme}' ({definition})")]
    DefinitionMismatch { morpheme: String, definition: String },

    #[error("Game mode not available: {mode}")]
    ModeNotAvailable { mode: String },

    #[error("Only players can play")]
    NotAPlayer,

    #[error("Operation not supported in {mode} mode")]
    WrongMode { mode: String },
}
