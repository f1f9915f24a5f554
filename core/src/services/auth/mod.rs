//! Authentication service module
//!
//! - Login with username and password
//! - Player registration and admin creation
//! - Account maintenance: rename, password change, deletion

mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use password::{hash_password, verify_password};
pub use service::AuthService;
