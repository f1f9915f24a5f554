//! WordCrafter HTTP API
//!
//! Library half of the server binary, exported so integration tests can
//! build the application around in-memory repositories.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
