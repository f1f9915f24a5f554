//! Database configuration module

use serde::{Deserialize, Serialize};
use std::env;

/// Relational backend the application persists to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackend {
    /// Local file database, used during development
    #[default]
    Sqlite,
    /// Networked MySQL server, used in production
    MySql,
}

impl DatabaseBackend {
    /// Infer the backend from a connection URL scheme
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("sqlite:") {
            Some(DatabaseBackend::Sqlite)
        } else if url.starts_with("mysql:") || url.starts_with("mariadb:") {
            Some(DatabaseBackend::MySql)
        } else {
            None
        }
    }
}

impl std::str::FromStr for DatabaseBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SQLITE" => Ok(DatabaseBackend::Sqlite),
            "MYSQL" => Ok(DatabaseBackend::MySql),
            _ => Err(format!("Unsupported database type: {}", s)),
        }
    }
}

impl std::fmt::Display for DatabaseBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseBackend::Sqlite => write!(f, "sqlite"),
            DatabaseBackend::MySql => write!(f, "mysql"),
        }
    }
}

/// Database connection and pool configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Which SQL dialect to speak
    #[serde(default)]
    pub backend: DatabaseBackend,

    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout: u64,

    /// Idle connection timeout in seconds
    pub idle_timeout: u64,

    /// Maximum lifetime of a connection in seconds
    pub max_lifetime: u64,

    /// Insert the default admin, morphemes and words into an empty database
    #[serde(default = "default_seed")]
    pub seed_defaults: bool,
}

pub const DEFAULT_SQLITE_FILE: &str = "wordcrafter.db";

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::sqlite(DEFAULT_SQLITE_FILE)
    }
}

impl DatabaseConfig {
    /// Configuration for a SQLite file, created on first connect
    pub fn sqlite(path: impl AsRef<str>) -> Self {
        Self {
            backend: DatabaseBackend::Sqlite,
            url: format!("sqlite://{}?mode=rwc", path.as_ref()),
            max_connections: 5,
            connect_timeout: 30,
            idle_timeout: 600,
            max_lifetime: 1800,
            seed_defaults: default_seed(),
        }
    }

    /// Configuration for a MySQL server
    pub fn mysql(host: &str, port: u16, name: &str, user: &str, password: &str) -> Self {
        Self {
            backend: DatabaseBackend::MySql,
            url: format!("mysql://{}:{}@{}:{}/{}", user, password, host, port, name),
            max_connections: 10,
            ..Self::default()
        }
    }

    /// Create from environment variables
    ///
    /// `DB_TYPE` selects the backend (`SQLITE` unless set to `MYSQL`), the
    /// `DB_*` variables describe the MySQL server and `DATABASE_URL`
    /// replaces the computed URL entirely.
    pub fn from_env() -> Self {
        let backend = env::var("DB_TYPE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        let mut config = match backend {
            DatabaseBackend::Sqlite => Self::default(),
            DatabaseBackend::MySql => {
                let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
                let port = env::var("DB_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3306);
                let name = env::var("DB_NAME").unwrap_or_else(|_| "wordcrafter".to_string());
                let user = env::var("DB_USER").unwrap_or_else(|_| "wordcrafter".to_string());
                let password = env::var("DB_PASSWORD").unwrap_or_default();
                Self::mysql(&host, port, &name, &user, &password)
            }
        };

        if let Ok(url) = env::var("DATABASE_URL") {
            if let Some(detected) = DatabaseBackend::from_url(&url) {
                config.backend = detected;
            }
            config.url = url;
        }
        if let Some(max) = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.max_connections = max;
        }
        if let Some(timeout) = env::var("DATABASE_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.connect_timeout = timeout;
        }

        config
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Enable or disable default data seeding
    pub fn with_seed_defaults(mut self, seed: bool) -> Self {
        self.seed_defaults = seed;
        self
    }

    /// Connection URL with any password masked, for logging
    pub fn redacted_url(&self) -> String {
        match (self.url.find("://"), self.url.rfind('@')) {
            (Some(scheme_end), Some(at)) if at > scheme_end => {
                let credentials = &self.url[scheme_end + 3..at];
                match credentials.split_once(':') {
                    Some((user, _)) => format!(
                        "{}{}:****{}",
                        &self.url[..scheme_end + 3],
                        user,
                        &self.url[at..]
                    ),
                    None => self.url.clone(),
                }
            }
            _ => self.url.clone(),
        }
    }
}

fn default_seed() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sqlite_file() {
        let config = DatabaseConfig::default();
        assert_eq!(config.backend, DatabaseBackend::Sqlite);
        assert_eq!(config.url, "sqlite://wordcrafter.db?mode=rwc");
        assert!(config.seed_defaults);
    }

    #[test]
    fn test_mysql_url() {
        let config = DatabaseConfig::mysql("db", 3307, "wordcrafter", "wc", "secret");
        assert_eq!(config.backend, DatabaseBackend::MySql);
        assert_eq!(config.url, "mysql://wc:secret@db:3307/wordcrafter");
        assert_eq!(config.redacted_url(), "mysql://wc:****@db:3307/wordcrafter");
    }

    #[test]
    fn test_backend_parsing() {
        assert_eq!("SQLITE".parse::<DatabaseBackend>().unwrap(), DatabaseBackend::Sqlite);
        assert_eq!("mysql".parse::<DatabaseBackend>().unwrap(), DatabaseBackend::MySql);
        assert!("postgres".parse::<DatabaseBackend>().is_err());
        assert_eq!(
            DatabaseBackend::from_url("mysql://localhost/x"),
            Some(DatabaseBackend::MySql)
        );
        assert_eq!(DatabaseBackend::from_url("postgres://x"), None);
    }

    #[test]
    fn test_redacted_url_without_password() {
        let config = DatabaseConfig::sqlite("/tmp/test.db");
        assert_eq!(config.redacted_url(), config.url);
    }
}
