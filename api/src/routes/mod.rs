//! Route handlers grouped by URL scope
//!
//! - `auth` - registration and login
//! - `account` - profile maintenance for any signed-in user
//! - `game` - player sessions
//! - `editor` - dictionary maintenance for admins

pub mod account;
pub mod auth;
pub mod editor;
pub mod game;
