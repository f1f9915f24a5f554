//! # WordCrafter Core
//!
//! Domain layer for the WordCrafter word-building game: entities, errors,
//! repository interfaces and the services that implement the rules.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
