//! Injectable sources of time and randomness.

use chrono::{DateTime, Utc};
#[cfg(test)]
use mockall::automock;

use crate::domain::credential::generate_salt;

/// Source of the current instant.
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of account salts.
#[cfg_attr(test, automock)]
pub trait SaltSource: Send + Sync {
    fn random_string(&self, length: usize) -> String;
}

/// Salts drawn from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSalt;

impl SaltSource for ThreadRngSalt {
    fn random_string(&self, length: usize) -> String {
        generate_salt(&mut rand::thread_rng(), length)
    }
}
