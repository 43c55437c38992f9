//! Concept Clarifier domain types.
//!
//! Pure data and invariants shared by the engine and the player:
//!
//! - `types/` - vocabulary enums (`Role`)
//! - `value_objects/` - validated inputs (`UserMessage`)
//! - `aggregates/` - `Turn` and the append-only `ConversationHistory`
//! - `error` - `DomainError`

pub mod aggregates;
pub mod error;
pub mod types;
pub mod value_objects;

pub use aggregates::{ConversationHistory, Turn};
pub use error::DomainError;
pub use types::Role;
pub use value_objects::UserMessage;
