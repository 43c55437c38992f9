//! Concept Clarifier Engine library.
//!
//! This crate contains the tutoring exchange and everything needed to serve it.
//!
//! ## Structure
//!
//! - `use_cases/` - The exchange: history + message in, reply + history out
//! - `prompt_templates` - The tutor instruction template
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod prompt_templates;
pub mod use_cases;

pub use app::App;
