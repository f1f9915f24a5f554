//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod game_mode;

pub use auth_response::{AuthResponse, UserSummary};
pub use game_mode::GameMode;
