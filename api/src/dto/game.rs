use serde::{Deserialize, Serialize};
use validator::Validate;
use wc_core::domain::value_objects::GameMode;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartSessionRequest {
    /// `main_game`, `free_build` or `prefix_matcher`
    pub mode: GameMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleRequest {
    pub morpheme_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitRequest {
    /// The player's own definition of the combined word
    #[validate(length(max = 500))]
    pub definition: String,
}
