//! Shared utilities and common types for the WordCrafter server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error envelope and error codes
//! - Response envelopes and language preferences
//! - Text validation helpers

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, DatabaseBackend, DatabaseConfig, Environment, JwtConfig,
    LoggingConfig, PasswordConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{ApiResponse, HealthResponse, HealthStatus, Language};
pub use utils::validation;
