//! Shared vocabulary types.

mod role;

pub use role::Role;
