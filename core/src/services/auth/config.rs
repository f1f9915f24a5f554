//! Configuration for the authentication service

use wc_shared::PasswordConfig;

/// Credential rules applied by the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// bcrypt work factor for new hashes
    pub bcrypt_cost: u32,
    /// Minimum characters for a changed password
    pub password_min_length: usize,
    /// Minimum characters for a renamed username
    pub username_min_length: usize,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
            password_min_length: 4,
            username_min_length: 3,
        }
    }
}

impl From<&PasswordConfig> for AuthServiceConfig {
    fn from(config: &PasswordConfig) -> Self {
        Self {
            bcrypt_cost: config.bcrypt_cost,
            password_min_length: config.min_length,
            username_min_length: config.username_min_length,
        }
    }
}
