//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

#[derive(Default)]
struct State {
    users: BTreeMap<i64, User>,
    next_id: i64,
    fail_score_updates: bool,
}

/// Mock user repository for testing
#[derive(Clone, Default)]
pub struct MockUserRepository {
    state: Arc<RwLock<State>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored account
    pub async fn all(&self) -> Vec<User> {
        self.state.read().await.users.values().cloned().collect()
    }

    /// Make `add_score` fail with a database error until switched back
    pub async fn set_fail_score_updates(&self, should_fail: bool) {
        self.state.write().await.fail_score_updates = should_fail;
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let state = self.state.read().await;
        Ok(state.users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let state = self.state.read().await;
        Ok(state.users.values().any(|u| u.username == username))
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut state = self.state.write().await;

        if state.users.values().any(|u| u.username == user.username) {
            return Err(AuthError::UserAlreadyExists.into());
        }

        state.next_id += 1;
        let created = User {
            id: state.next_id,
            username: user.username,
            password_hash: user.password_hash,
            role: user.role,
            score: 0,
        };
        state.users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_username(&self, id: i64, username: &str) -> Result<(), DomainError> {
        let mut state = self.state.write().await;

        if state
            .users
            .values()
            .any(|u| u.id != id && u.username == username)
        {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let user = state
            .users
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("User"))?;
        user.username = username.to_string();
        Ok(())
    }

    async fn update_password_hash(&self, id: i64, password_hash: &str) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        let user = state
            .users
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("User"))?;
        user.password_hash = password_hash.to_string();
        Ok(())
    }

    async fn add_score(&self, id: i64, points: i64) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if state.fail_score_updates {
            return Err(DomainError::database("score update failed"));
        }
        let user = state
            .users
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("User"))?;
        user.score += points;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.state.write().await.users.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.state.read().await.users.len() as u64)
    }
}
