use serde::{Deserialize, Serialize};
use validator::Validate;

use super::auth::validate_password_bytes;
use wc_core::domain::entities::word::Word;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUsernameRequest {
    #[validate(length(max = 50))]
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    pub old_password: String,

    #[validate(custom = "validate_password_bytes")]
    pub new_password: String,

    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountDeletedResponse {
    /// Game sessions closed along with the account
    pub ended_sessions: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FoundWordsResponse {
    pub words: Vec<Word>,
    pub count: usize,
}

impl From<Vec<Word>> for FoundWordsResponse {
    fn from(words: Vec<Word>) -> Self {
        Self {
            count: words.len(),
            words,
        }
    }
}
