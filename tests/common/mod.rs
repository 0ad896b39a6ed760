//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use account_service::config::SigningKeys;
use account_service::domain::{Account, NewAccount, ProfileUpdate};
use account_service::errors::{StoreError, StoreResult};
use account_service::infra::{AccountRepository, Clock, SaltSource};
use account_service::services::{AccountManager, TokenService};

pub const PRIVATE_PEM: &[u8] = include_bytes!("../fixtures/app.rsa");
pub const PUBLIC_PEM: &[u8] = include_bytes!("../fixtures/app.rsa.pub");
pub const FIXED_SALT: &str = "k3y5a1tv4lue";

/// In-memory account store with a unique phone index and serial IDs.
#[derive(Default)]
pub struct InMemoryAccounts {
    rows: Mutex<Vec<Account>>,
}

impl InMemoryAccounts {
    pub fn snapshot(&self, id: i32) -> Option<Account> {
        self.rows.lock().unwrap().iter().find(|a| a.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

fn phone_taken(rows: &[Account], phone_number: &str, except_id: Option<i32>) -> bool {
    !phone_number.is_empty()
        && rows
            .iter()
            .any(|a| a.phone_number == phone_number && Some(a.id) != except_id)
}

#[async_trait]
impl AccountRepository for InMemoryAccounts {
    async fn find_by_phone(&self, phone_number: &str) -> StoreResult<Option<Account>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|a| !a.phone_number.is_empty() && a.phone_number == phone_number)
            .cloned())
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Account>> {
        Ok(self.snapshot(id))
    }

    async fn create(&self, account: NewAccount) -> StoreResult<Account> {
        let mut rows = self.rows.lock().unwrap();
        if phone_taken(&rows, &account.phone_number, None) {
            return Err(StoreError::DuplicatePhone);
        }

        let created = Account {
            id: rows.len() as i32 + 1,
            full_name: account.full_name,
            phone_number: account.phone_number,
            password_digest: account.password_digest,
            salt: account.salt,
            successful_login: 0,
            created_at: account.created_at,
            updated_at: Some(account.updated_at),
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn update_profile(&self, id: i32, update: ProfileUpdate) -> StoreResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if phone_taken(&rows, &update.phone_number, Some(id)) {
            return Err(StoreError::DuplicatePhone);
        }
        if let Some(row) = rows.iter_mut().find(|a| a.id == id) {
            row.phone_number = update.phone_number;
            row.full_name = update.full_name;
            row.updated_at = Some(update.updated_at);
        }
        Ok(())
    }

    async fn increment_login_count(&self, id: i32) -> StoreResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|a| a.id == id) {
            row.successful_login += 1;
        }
        Ok(())
    }
}

/// Clock pinned to a settable instant.
pub struct FixedClock(Mutex<DateTime<Utc>>);

impl FixedClock {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(Mutex::new(instant))
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.0.lock().unwrap();
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

/// Always hands out the same salt.
pub struct FixedSalt;

impl SaltSource for FixedSalt {
    fn random_string(&self, length: usize) -> String {
        FIXED_SALT.chars().cycle().take(length).collect()
    }
}

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 3, 0, 0).unwrap()
}

pub fn token_service() -> Arc<TokenService> {
    let keys = SigningKeys::from_pem(PRIVATE_PEM, PUBLIC_PEM).unwrap();
    Arc::new(TokenService::new(keys, Duration::hours(1)))
}

/// Wired service over fresh in-memory storage.
pub struct Harness {
    pub accounts: Arc<InMemoryAccounts>,
    pub tokens: Arc<TokenService>,
    pub clock: Arc<FixedClock>,
    pub service: Arc<AccountManager>,
}

impl Harness {
    pub fn new() -> Self {
        let accounts = Arc::new(InMemoryAccounts::default());
        let tokens = token_service();
        let clock = Arc::new(FixedClock::at(start_time()));
        let service = Arc::new(AccountManager::new(
            accounts.clone(),
            tokens.clone(),
            clock.clone(),
            Arc::new(FixedSalt),
        ));

        Self {
            accounts,
            tokens,
            clock,
            service,
        }
    }
}
