//! # Infrastructure Layer
//!
//! SQL persistence for WordCrafter. The repository traits of `wc_core` are
//! implemented once over `sqlx`'s Any driver, so the same code serves a
//! local SQLite file during development and a MySQL server in production.
//!
//! ## Start-up
//!
//! [`initialize`] connects the pool, creates missing tables, seeds the
//! default admin, morphemes and words into an empty database and hands back
//! the repositories wrapped in [`Infrastructure`].

use std::sync::Arc;

use wc_shared::{AppConfig, DatabaseConfig};

/// Database module - pool, schema, seed data and repositories
pub mod database;

pub use database::{
    DatabasePool, PoolStatistics, SqlMorphemeRepository, SqlUserRepository, SqlWordRepository,
};

/// Connected database with the repositories built on it
#[derive(Clone)]
pub struct Infrastructure {
    pool: DatabasePool,
    users: Arc<SqlUserRepository>,
    morphemes: Arc<SqlMorphemeRepository>,
    words: Arc<SqlWordRepository>,
}

impl Infrastructure {
    /// Connect, create tables and optionally seed the defaults
    pub async fn connect(
        config: &DatabaseConfig,
        bcrypt_cost: u32,
    ) -> Result<Self, InfrastructureError> {
        tracing::info!(
            backend = %config.backend,
            url = %config.redacted_url(),
            "Initializing infrastructure services..."
        );

        let pool = DatabasePool::new(config).await?;
        database::schema::create_tables(&pool).await?;

        if config.seed_defaults {
            database::seed::insert_default_data(&pool, bcrypt_cost).await?;
        }

        tracing::info!(statistics = %pool.statistics(), "Infrastructure services initialized");

        Ok(Self {
            users: Arc::new(SqlUserRepository::new(pool.clone())),
            morphemes: Arc::new(SqlMorphemeRepository::new(pool.clone())),
            words: Arc::new(SqlWordRepository::new(pool.clone())),
            pool,
        })
    }

    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    pub fn user_repository(&self) -> Arc<SqlUserRepository> {
        Arc::clone(&self.users)
    }

    pub fn morpheme_repository(&self) -> Arc<SqlMorphemeRepository> {
        Arc::clone(&self.morphemes)
    }

    pub fn word_repository(&self) -> Arc<SqlWordRepository> {
        Arc::clone(&self.words)
    }

    /// Close every pooled connection
    pub async fn shutdown(&self) {
        self.pool.close().await;
    }
}

/// Initialize infrastructure services from the application configuration
pub async fn initialize(config: &AppConfig) -> Result<Infrastructure, InfrastructureError> {
    Infrastructure::connect(&config.database, config.auth.password.bcrypt_cost).await
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Connection or query failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Seeding went through the domain layer and was rejected
    #[error("Seed error: {0}")]
    Domain(#[from] wc_core::errors::DomainError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
