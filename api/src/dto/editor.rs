use serde::{Deserialize, Serialize};
use validator::Validate;

use super::auth::validate_password_bytes;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddMorphemeRequest {
    #[validate(length(max = 100))]
    pub text: String,

    #[validate(length(max = 500))]
    pub definition: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddWordRequest {
    #[validate(length(max = 100))]
    pub text: String,

    /// Decomposition in reading order
    pub morpheme_ids: Vec<i64>,

    pub points: i64,

    #[serde(default)]
    #[validate(length(max = 500))]
    pub definition: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAdminRequest {
    #[validate(length(max = 50))]
    pub username: String,

    #[validate(custom = "validate_password_bytes")]
    pub password: String,

    pub confirm_password: String,
}
