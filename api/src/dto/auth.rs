use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// bcrypt only reads the first 72 bytes of a password
pub const PASSWORD_MAX_BYTES: usize = 72;

/// Rejects passwords bcrypt would silently truncate
pub fn validate_password_bytes(password: &str) -> Result<(), ValidationError> {
    if password.len() > PASSWORD_MAX_BYTES {
        let mut error = ValidationError::new("length");
        error.add_param("max_bytes".into(), &PASSWORD_MAX_BYTES);
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(max = 50))]
    pub username: String,

    #[validate(custom = "validate_password_bytes")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(max = 50))]
    pub username: String,

    #[validate(custom = "validate_password_bytes")]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_limit_counts_bytes() {
        let ascii = RegisterRequest {
            username: "alice".to_string(),
            password: "a".repeat(72),
        };
        assert!(ascii.validate().is_ok());

        // 40 characters but 80 bytes
        let accented = RegisterRequest {
            username: "alice".to_string(),
            password: "é".repeat(40),
        };
        let errors = accented.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }
}
