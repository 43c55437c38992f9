//! Aggregates - consistency boundaries for conversation state

mod conversation;

pub use conversation::{ConversationHistory, Turn};
