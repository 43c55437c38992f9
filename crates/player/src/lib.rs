//! Concept Clarifier Player.
//!
//! Terminal chat front-end. Holds the conversation for the life of the
//! process and runs each exchange either in-process or against a running engine.

pub mod backend;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod session;

pub use backend::{LocalBackend, RemoteBackend, TutorBackend};
pub use config::PlayerConfig;
pub use error::PlayerError;
pub use session::ChatSession;
