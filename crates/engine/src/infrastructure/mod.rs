//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod config;
pub mod groq;
pub mod ports;
pub mod prompt_templates;
