//! Shared types used across layers.

mod response;

pub use response::ApiResponse;
