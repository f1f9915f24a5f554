//! Configuration module with business-specific sub-modules
//!
//! - `auth` - JWT and password rules
//! - `database` - backend selection and pool configuration
//! - `environment` - environment detection and logging configuration
//! - `server` - HTTP bind address and CORS origins

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, JwtConfig, PasswordConfig};
pub use database::{DatabaseBackend, DatabaseConfig};
pub use environment::{Environment, LoggingConfig};
pub use server::ServerConfig;

/// Prefix for environment overrides, e.g. `WORDCRAFTER__SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "WORDCRAFTER";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,

    pub server: ServerConfig,

    pub database: DatabaseConfig,

    pub auth: AuthConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_for(Environment::default())
    }
}

impl AppConfig {
    /// Built-in defaults for an environment
    pub fn default_for(environment: Environment) -> Self {
        Self {
            environment,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Defaults overlaid with the plain environment variables
    /// (`DB_TYPE`, `JWT_SECRET`, `SERVER_PORT`, ...)
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Layered configuration: `from_env()`, then the optional
    /// `config/<environment>.toml`, then `WORDCRAFTER__*` overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let base = Self::from_env();
        let file = base.environment.config_file();

        Config::builder()
            .add_source(Config::try_from(&base)?)
            .add_source(File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
