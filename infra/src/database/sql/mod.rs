//! SQL implementations of the repository traits over the Any driver
//!
//! Queries use `?` placeholders, which both SQLite and MySQL accept.

mod morpheme_repository_impl;
mod user_repository_impl;
mod word_repository_impl;

pub use morpheme_repository_impl::SqlMorphemeRepository;
pub use user_repository_impl::SqlUserRepository;
pub use word_repository_impl::SqlWordRepository;

use wc_core::errors::DomainError;

/// Whether the statement failed on a UNIQUE or PRIMARY KEY constraint
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}

/// Wrap a driver failure with what was being attempted
pub(crate) fn query_failed(action: &str, err: sqlx::Error) -> DomainError {
    DomainError::database(format!("Failed to {}: {}", action, err))
}
