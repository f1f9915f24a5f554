//! Type definitions shared by every layer
//!
//! - `language` - Languages offered for user-facing messages
//! - `response` - API response wrappers and health checks

pub mod language;
pub mod response;

pub use language::Language;
pub use response::{ApiResponse, HealthResponse, HealthStatus};
