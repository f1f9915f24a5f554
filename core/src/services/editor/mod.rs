//! Dictionary editing for admins

mod service;


pub use service::EditorService;
