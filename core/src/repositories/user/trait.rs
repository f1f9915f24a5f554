//! User repository trait defining the interface for account persistence.
//!
//! Implementations live in the infrastructure layer; the in-memory mock in
//! this module backs unit tests.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use wc_core::domain::entities::user::{NewUser, User};
/// use wc_core::errors::DomainError;
/// use wc_core::repositories::UserRepository;
///
/// struct SqlUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for SqlUserRepository {
///     async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     // ... other methods
/// #   async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> { Ok(None) }
/// #   async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> { Ok(false) }
/// #   async fn create(&self, user: NewUser) -> Result<User, DomainError> { unimplemented!() }
/// #   async fn update_username(&self, id: i64, username: &str) -> Result<(), DomainError> { Ok(()) }
/// #   async fn update_password_hash(&self, id: i64, hash: &str) -> Result<(), DomainError> { Ok(()) }
/// #   async fn add_score(&self, id: i64, points: i64) -> Result<(), DomainError> { Ok(()) }
/// #   async fn delete(&self, id: i64) -> Result<bool, DomainError> { Ok(false) }
/// #   async fn count(&self) -> Result<u64, DomainError> { Ok(0) }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by exact username
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No account with that name
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;

    /// Insert a new account with a score of 0
    ///
    /// # Errors
    /// * `AuthError::UserAlreadyExists` - The username is taken
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Rename an account
    ///
    /// # Errors
    /// * `DomainError::NotFound` - No account with that id
    /// * `AuthError::UserAlreadyExists` - Another account has the name
    async fn update_username(&self, id: i64, username: &str) -> Result<(), DomainError>;

    async fn update_password_hash(&self, id: i64, password_hash: &str) -> Result<(), DomainError>;

    /// Atomically add `points` to the stored score
    async fn add_score(&self, id: i64, points: i64) -> Result<(), DomainError>;

    /// Delete an account and the words it has found
    ///
    /// Returns `false` when no account had that id.
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}
