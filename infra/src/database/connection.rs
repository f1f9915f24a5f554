//! Connection pool management

use std::fmt;
use std::time::Duration;

use sqlx::any::{AnyPoolOptions, AnyQueryResult};
use sqlx::{AnyPool, Row};
use wc_shared::{DatabaseBackend, DatabaseConfig};

use crate::InfrastructureError;

/// Pool of connections to the configured backend
#[derive(Clone, Debug)]
pub struct DatabasePool {
    pool: AnyPool,
    backend: DatabaseBackend,
}

impl DatabasePool {
    /// Connect using the given configuration
    ///
    /// The URL scheme must agree with the configured backend, since the SQL
    /// dialect is picked from the backend.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        match DatabaseBackend::from_url(&config.url) {
            Some(backend) if backend == config.backend => {}
            Some(backend) => {
                return Err(InfrastructureError::Config(format!(
                    "database URL is for {} but backend is {}",
                    backend, config.backend
                )))
            }
            None => {
                return Err(InfrastructureError::Config(format!(
                    "unsupported database URL: {}",
                    config.redacted_url()
                )))
            }
        }

        sqlx::any::install_default_drivers();

        let pool = AnyPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Some(Duration::from_secs(config.idle_timeout)))
            .max_lifetime(Some(Duration::from_secs(config.max_lifetime)))
            .connect(&config.url)
            .await?;

        tracing::info!(backend = %config.backend, "Database pool created");

        Ok(Self {
            pool,
            backend: config.backend,
        })
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    pub fn backend(&self) -> DatabaseBackend {
        self.backend
    }

    /// Run `SELECT 1` on a pooled connection
    pub async fn health_check(&self) -> Result<bool, sqlx::Error> {
        let row = sqlx::query("SELECT 1 AS ok").fetch_one(&self.pool).await?;
        let ok: i64 = row.try_get("ok")?;
        Ok(ok == 1)
    }

    pub fn statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.pool.options().get_max_connections(),
        }
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }

    /// Idempotent insert keyword for the active dialect
    pub(crate) fn insert_ignore(&self) -> &'static str {
        match self.backend {
            DatabaseBackend::Sqlite => "INSERT OR IGNORE",
            DatabaseBackend::MySql => "INSERT IGNORE",
        }
    }
}

/// Id generated by an `INSERT`
pub(crate) fn inserted_id(result: &AnyQueryResult) -> Result<i64, sqlx::Error> {
    result
        .last_insert_id()
        .ok_or_else(|| sqlx::Error::Protocol("no generated id returned".to_string()))
}

/// Snapshot of pool usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatistics {
    pub connections: u32,
    pub idle_connections: usize,
    pub max_connections: u32,
}

impl fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "connections: {}/{} ({} idle)",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}
