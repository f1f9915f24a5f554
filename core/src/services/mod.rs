//! Business services containing game logic and use cases.

pub mod auth;
pub mod editor;
pub mod game;
pub mod player;
pub mod token;

pub use auth::{AuthService, AuthServiceConfig};
pub use editor::EditorService;
pub use game::{
    free_build_points, validate_definition, ConstructedWord, FreeBuildOutcome, GameEvent,
    GamePlay, GameService, GameSession, SessionEvent, SessionView, VerifyOutcome,
};
pub use player::PlayerService;
pub use token::{TokenService, TokenServiceConfig};
