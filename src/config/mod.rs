//! Application configuration module
//!
//! Handles environment variables, signing keys and application-wide constants.

mod constants;
mod keys;
mod settings;

pub use constants::*;
pub use keys::SigningKeys;
pub use settings::Config;
