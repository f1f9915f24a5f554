//! Main authentication service implementation

use std::sync::Arc;

use wc_shared::validation::{char_len, required};

use crate::domain::entities::user::{NewUser, User, USERNAME_MAX_LENGTH};
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::password::{hash_password, verify_password};

/// Authentication service for login, registration and account maintenance
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    config: AuthServiceConfig,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            config,
        }
    }

    pub fn token_service(&self) -> &TokenService {
        &self.token_service
    }

    /// Check a username/password pair
    ///
    /// Unknown users and wrong passwords both yield
    /// `AuthError::InvalidCredentials`.
    pub async fn authenticate(&self, username: &str, password: &str) -> DomainResult<User> {
        let user = self
            .user_repository
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash).await {
            tracing::debug!(username = %username, "Password verification failed");
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Authenticate and issue an access token
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<AuthResponse> {
        let username = required(username).ok_or_else(|| ValidationError::required("username"))?;
        if password.is_empty() {
            return Err(ValidationError::required("password").into());
        }

        let user = match self.authenticate(username, password).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(username = %username, "Login failed");
                return Err(e);
            }
        };

        let token = self.token_service.generate_access_token(&user)?;
        tracing::info!(user_id = user.id, role = %user.role, "User logged in");

        Ok(AuthResponse::new(
            token,
            self.token_service.access_token_expiry(),
            &user,
        ))
    }

    /// Create a player account
    pub async fn register_player(&self, username: &str, password: &str) -> DomainResult<User> {
        let (username, password_hash) = self.prepare_account(username, password, None).await?;
        let user = self
            .user_repository
            .create(NewUser::player(username, password_hash))
            .await?;

        tracing::info!(user_id = user.id, username = %user.username, "Player registered");
        Ok(user)
    }

    /// Create an admin account; the password must be typed twice
    pub async fn create_admin(
        &self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> DomainResult<User> {
        let (username, password_hash) = self
            .prepare_account(username, password, Some(confirm_password))
            .await?;
        let user = self
            .user_repository
            .create(NewUser::admin(username, password_hash))
            .await?;

        tracing::info!(user_id = user.id, username = %user.username, "Admin account created");
        Ok(user)
    }

    pub async fn profile(&self, user_id: i64) -> DomainResult<User> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotFound.into())
    }

    /// Rename an account
    pub async fn update_username(&self, user_id: i64, new_username: &str) -> DomainResult<User> {
        let new_username =
            required(new_username).ok_or_else(|| ValidationError::required("username"))?;
        self.check_username_length(new_username)?;

        let user = self.profile(user_id).await?;
        if user.username != new_username
            && self.user_repository.exists_by_username(new_username).await?
        {
            return Err(AuthError::UserAlreadyExists.into());
        }

        self.user_repository
            .update_username(user_id, new_username)
            .await?;
        tracing::info!(user_id, from = %user.username, to = %new_username, "Username changed");

        Ok(User {
            username: new_username.to_string(),
            ..user
        })
    }

    /// Change a password after re-checking the current one
    pub async fn update_password(
        &self,
        user_id: i64,
        old_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> DomainResult<()> {
        for (field, value) in [
            ("old_password", old_password),
            ("new_password", new_password),
            ("confirm_password", confirm_password),
        ] {
            if value.is_empty() {
                return Err(ValidationError::required(field).into());
            }
        }
        if new_password != confirm_password {
            return Err(AuthError::PasswordMismatch.into());
        }
        if char_len(new_password) < self.config.password_min_length {
            return Err(ValidationError::TooShort {
                field: "new_password".to_string(),
                min: self.config.password_min_length,
            }
            .into());
        }

        let user = self.profile(user_id).await?;
        if !verify_password(old_password, &user.password_hash).await {
            return Err(AuthError::IncorrectPassword.into());
        }

        let hash = hash_password(new_password, self.config.bcrypt_cost).await?;
        self.user_repository
            .update_password_hash(user_id, &hash)
            .await?;
        tracing::info!(user_id, "Password changed");
        Ok(())
    }

    /// Delete an account with the words it found
    pub async fn delete_account(&self, user_id: i64) -> DomainResult<()> {
        if !self.user_repository.delete(user_id).await? {
            return Err(AuthError::UserNotFound.into());
        }
        tracing::info!(user_id, "Account deleted");
        Ok(())
    }

    /// Validate new credentials and hash the password
    async fn prepare_account<'a>(
        &self,
        username: &'a str,
        password: &str,
        confirm_password: Option<&str>,
    ) -> DomainResult<(&'a str, String)> {
        let username = required(username).ok_or_else(|| ValidationError::required("username"))?;
        if password.is_empty() {
            return Err(ValidationError::required("password").into());
        }
        if confirm_password.is_some_and(|confirm| confirm != password) {
            return Err(AuthError::PasswordMismatch.into());
        }
        if char_len(username) > USERNAME_MAX_LENGTH {
            return Err(ValidationError::InvalidFormat {
                field: "username".to_string(),
            }
            .into());
        }
        if self.user_repository.exists_by_username(username).await? {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let hash = hash_password(password, self.config.bcrypt_cost).await?;
        Ok((username, hash))
    }

    fn check_username_length(&self, username: &str) -> DomainResult<()> {
        let len = char_len(username);
        if len < self.config.username_min_length {
            return Err(ValidationError::TooShort {
                field: "username".to_string(),
                min: self.config.username_min_length,
            }
            .into());
        }
        if len > USERNAME_MAX_LENGTH {
            return Err(ValidationError::InvalidFormat {
                field: "username".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
