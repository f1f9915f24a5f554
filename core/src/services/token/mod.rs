//! Token service module for JWT management
//!
//! Access tokens are HS256-signed and carry the account id, username and
//! role. There are no refresh tokens; clients log in again on expiry.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
