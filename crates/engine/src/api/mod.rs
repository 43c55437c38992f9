//! API layer - HTTP entry points.

pub mod http;

pub use http::{build_router, ApiError};
