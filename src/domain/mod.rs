//! Domain layer - Core business entities and logic
//!
//! This module contains the account entity, its write models and the
//! credential codec. It is independent of infrastructure concerns.

mod account;
pub mod credential;

pub use account::{to_local_time, Account, NewAccount, ProfileUpdate};
