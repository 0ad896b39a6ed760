//! Account Service - phone-number based user accounts
//!
//! Registration, login with RS256 access tokens, and profile management
//! over an Axum HTTP API backed by PostgreSQL.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration, signing keys and constants
//! - **domain**: Account entity and credential codec
//! - **validation**: Field rules for request forms
//! - **services**: Account use cases and token service
//! - **infra**: Database, repositories, clock and salt providers
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared response envelope
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate token signing keys
//! account-service keys generate
//!
//! # Run migrations
//! account-service migrate up
//!
//! # Start the server
//! account-service serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;
pub mod validation;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::Account;
pub use errors::{AppError, AppResult};
