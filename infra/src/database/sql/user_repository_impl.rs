//! SQL implementation of the UserRepository trait.

use async_trait::async_trait;
use sqlx::any::AnyRow;
use sqlx::Row;

use wc_core::domain::entities::user::{NewUser, User, UserRole};
use wc_core::errors::{AuthError, DomainError};
use wc_core::repositories::UserRepository;

use super::{is_unique_violation, query_failed};
use crate::database::connection::{inserted_id, DatabasePool};

const USER_COLUMNS: &str = "id, username, password_hash, role, score";

/// SQL implementation of UserRepository
pub struct SqlUserRepository {
    pool: DatabasePool,
}

impl SqlUserRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Map a `users` row to the entity
    fn row_to_user(row: &AnyRow) -> Result<User, DomainError> {
        let role: String = row
            .try_get("role")
            .map_err(|e| query_failed("read role", e))?;

        Ok(User {
            id: row.try_get("id").map_err(|e| query_failed("read id", e))?,
            username: row
                .try_get("username")
                .map_err(|e| query_failed("read username", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| query_failed("read password_hash", e))?,
            role: role.parse::<UserRole>().map_err(DomainError::database)?,
            score: row
                .try_get("score")
                .map_err(|e| query_failed("read score", e))?,
        })
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let sql = format!("SELECT {} FROM users WHERE username = ? LIMIT 1", USER_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(username)
            .fetch_optional(self.pool.pool())
            .await
            .map_err(|e| query_failed("find user by username", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let sql = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", USER_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(self.pool.pool())
            .await
            .map_err(|e| query_failed("find user by id", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(self.pool.pool())
            .await
            .map_err(|e| query_failed("check username", e))?;

        let count: i64 = row
            .try_get("count")
            .map_err(|e| query_failed("read count", e))?;
        Ok(count > 0)
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let result = sqlx::query(
            "INSERT INTO users (username, password_hash, role, score) VALUES (?, ?, ?, 0)",
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .execute(self.pool.pool())
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::from(AuthError::UserAlreadyExists)
            } else {
                query_failed("create user", e)
            }
        })?;

        let id = inserted_id(&result).map_err(|e| query_failed("read user id", e))?;
        tracing::debug!(user_id = id, username = %user.username, "User row inserted");

        Ok(User {
            id,
            username: user.username,
            password_hash: user.password_hash,
            role: user.role,
            score: 0,
        })
    }

    async fn update_username(&self, id: i64, username: &str) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE users SET username = ? WHERE id = ?")
            .bind(username)
            .bind(id)
            .execute(self.pool.pool())
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::from(AuthError::UserAlreadyExists)
                } else {
                    query_failed("rename user", e)
                }
            })?;

        // MySQL reports 0 affected rows when the value is unchanged
        if result.rows_affected() == 0 && self.find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("User"));
        }
        Ok(())
    }

    async fn update_password_hash(&self, id: i64, password_hash: &str) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE users SET password_hash = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(self.pool.pool())
            .await
            .map_err(|e| query_failed("update password", e))?;

        if result.rows_affected() == 0 && self.find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("User"));
        }
        Ok(())
    }

    async fn add_score(&self, id: i64, points: i64) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE users SET score = score + ? WHERE id = ?")
            .bind(points)
            .bind(id)
            .execute(self.pool.pool())
            .await
            .map_err(|e| query_failed("update score", e))?;

        if result.rows_affected() == 0 && self.find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("User"));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut tx = self
            .pool
            .pool()
            .begin()
            .await
            .map_err(|e| query_failed("begin transaction", e))?;

        sqlx::query("DELETE FROM player_words WHERE user_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| query_failed("delete found words", e))?;

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| query_failed("delete user", e))?;

        tx.commit()
            .await
            .map_err(|e| query_failed("commit transaction", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM users")
            .fetch_one(self.pool.pool())
            .await
            .map_err(|e| query_failed("count users", e))?;

        let count: i64 = row
            .try_get("count")
            .map_err(|e| query_failed("read count", e))?;
        Ok(count as u64)
    }
}
