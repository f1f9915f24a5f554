//! Game services
//!
//! - `service` - morpheme catalog and dictionary lookups
//! - `rules` - free-build scoring and the definition heuristic
//! - `session` - per-player selection state and its events
//! - `store` - running sessions and the event broadcast
//! - `play` - the operations a player performs during a session

mod play;
mod rules;
mod service;
mod session;
mod store;

#[cfg(test)]
mod tests;

pub use play::{FreeBuildOutcome, GamePlay, SessionView, VerifyOutcome};
pub use rules::{free_build_points, validate_definition, MAIN_GRID_SIZE};
pub use service::GameService;
pub use session::{ConstructedWord, GameEvent, GameSession};
pub use store::{SessionEvent, SessionStore};
