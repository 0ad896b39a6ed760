//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - Account repository
//! - Clock and salt providers

pub mod db;
pub mod providers;
pub mod repositories;

pub use db::{Database, Migrator};
pub use providers::{Clock, SaltSource, SystemClock, ThreadRngSalt};
pub use repositories::{AccountRepository, AccountStore};

#[cfg(test)]
pub use providers::{MockClock, MockSaltSource};
#[cfg(test)]
pub use repositories::MockAccountRepository;
