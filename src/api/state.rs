//! Application state - Dependency injection container.
//!
//! Provides centralized access to the account service and token verification.

use std::sync::Arc;

use crate::config::{Config, SigningKeys};
use crate::infra::{AccountStore, Clock, Database, SystemClock, ThreadRngSalt};
use crate::services::{AccountManager, AccountService, TokenService};

/// Application state shared by every handler and middleware.
#[derive(Clone)]
pub struct AppState {
    /// Account use cases
    pub accounts: Arc<dyn AccountService>,
    /// Access token issuing and verification
    pub tokens: Arc<TokenService>,
    /// Time source for token verification
    pub clock: Arc<dyn Clock>,
    /// Database handle, used by the health check when present
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Wire the production services over a connected database.
    pub fn from_config(database: Arc<Database>, keys: SigningKeys, config: &Config) -> Self {
        let tokens = Arc::new(TokenService::new(keys, config.token_ttl()));
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let accounts = Arc::new(AccountManager::new(
            Arc::new(AccountStore::new(database.connection())),
            tokens.clone(),
            clock.clone(),
            Arc::new(ThreadRngSalt),
        ));

        Self {
            accounts,
            tokens,
            clock,
            database: Some(database),
        }
    }

    /// Create state from manually injected services (no database health check).
    pub fn new(
        accounts: Arc<dyn AccountService>,
        tokens: Arc<TokenService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            accounts,
            tokens,
            clock,
            database: None,
        }
    }
}
