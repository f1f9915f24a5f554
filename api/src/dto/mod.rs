//! Request and response bodies of the HTTP API

pub mod account;
pub mod auth;
pub mod editor;
pub mod game;

pub use account::{
    AccountDeletedResponse, FoundWordsResponse, UpdatePasswordRequest, UpdateUsernameRequest,
};
pub use auth::{LoginRequest, RegisterRequest};
pub use editor::{AddMorphemeRequest, AddWordRequest, CreateAdminRequest};
pub use game::{StartSessionRequest, SubmitRequest, ToggleRequest};
