//! Concept Clarifier Shared - wire types for the Engine and its clients
//!
//! This crate contains the JSON contract of the Engine's HTTP API, used by the
//! Engine's handlers and by the Player's remote backend.
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json, chrono and the domain crate
//! 2. **No business logic** - Pure data types and serialization

pub mod requests;
pub mod responses;

pub use requests::ChatRequest;
pub use responses::{ChatResponse, ErrorResponse, HealthResponse};

/// Path of the chat endpoint.
pub const CHAT_PATH: &str = "/api/chat";

/// Path of the liveness probe.
pub const HEALTH_PATH: &str = "/api/health";
