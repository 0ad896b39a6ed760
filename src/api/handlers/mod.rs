//! HTTP request handlers.

pub mod account_handler;
pub mod profile_handler;

pub use account_handler::account_routes;
pub use profile_handler::profile_routes;
