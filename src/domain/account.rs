//! Account domain entity.

use chrono::{DateTime, FixedOffset, Utc};

use super::credential;
use crate::config::LOCAL_UTC_OFFSET_SECONDS;

/// Stored user account.
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i32,
    pub full_name: String,
    /// Empty when the owner cleared it through a profile update.
    pub phone_number: String,
    pub password_digest: String,
    pub salt: String,
    pub successful_login: i32,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: Option<DateTime<FixedOffset>>,
}

// Don't expose credential material in debug output
impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("full_name", &self.full_name)
            .field("phone_number", &self.phone_number)
            .field("password_digest", &"[REDACTED]")
            .field("salt", &"[REDACTED]")
            .field("successful_login", &self.successful_login)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

impl Account {
    /// Whether `password` reproduces the stored digest with this account's salt.
    pub fn verify_password(&self, password: &str) -> bool {
        credential::verify(password, &self.salt, &self.password_digest)
    }
}

/// Data required to insert a new account. The store assigns the ID and
/// starts the login counter at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub full_name: String,
    pub phone_number: String,
    pub password_digest: String,
    pub salt: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

/// Full overwrite of the editable profile fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub phone_number: String,
    pub full_name: String,
    pub updated_at: DateTime<FixedOffset>,
}

/// Convert an instant into the fixed UTC+7 offset stored with accounts.
pub fn to_local_time(instant: DateTime<Utc>) -> DateTime<FixedOffset> {
    match FixedOffset::east_opt(LOCAL_UTC_OFFSET_SECONDS) {
        Some(offset) => instant.with_timezone(&offset),
        None => instant.into(),
    }
}
