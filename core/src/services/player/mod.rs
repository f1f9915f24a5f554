//! Player score and found-word service

mod service;

pub use service::PlayerService;
