//! Value objects - Immutable objects defined by their attributes

mod user_message;

pub use user_message::UserMessage;
