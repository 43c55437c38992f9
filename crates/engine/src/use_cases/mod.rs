//! Use cases - user story orchestration over ports.

pub mod tutoring;

pub use tutoring::{Exchange, Exchanged, TutorError, TutoringUseCases};
