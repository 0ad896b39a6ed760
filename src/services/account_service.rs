//! Account service - registration, login and profile use cases.

use std::sync::Arc;

use async_trait::async_trait;

use super::forms::{
    LoginRequest, LoginResponse, ProfileResponse, RegisterRequest, RegisterResponse,
    UpdateProfileRequest,
};
use super::token_service::TokenService;
use crate::config::{
    ACCOUNT_SALT_LENGTH, MSG_PHONE_NUMBER_EXISTS, MSG_PHONE_NUMBER_NOT_REGISTERED,
    MSG_USER_NOT_EXISTS, MSG_WRONG_PASSWORD,
};
use crate::domain::{credential, to_local_time, Account, NewAccount, ProfileUpdate};
use crate::errors::{AppError, AppResult};
use crate::infra::{AccountRepository, Clock, SaltSource};

/// Account use cases. Dropping a returned future abandons the operation.
#[async_trait]
pub trait AccountService: Send + Sync {
    async fn register(&self, form: RegisterRequest) -> AppResult<RegisterResponse>;

    /// Verify credentials, issue an access token and count the login.
    async fn login(&self, form: LoginRequest) -> AppResult<LoginResponse>;

    async fn get_profile(&self, user_id: i32) -> AppResult<ProfileResponse>;

    async fn update_profile(&self, user_id: i32, form: UpdateProfileRequest) -> AppResult<()>;
}

/// Account service over an injected repository, token service, clock and salt source.
pub struct AccountManager {
    accounts: Arc<dyn AccountRepository>,
    tokens: Arc<TokenService>,
    clock: Arc<dyn Clock>,
    salts: Arc<dyn SaltSource>,
}

impl AccountManager {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        tokens: Arc<TokenService>,
        clock: Arc<dyn Clock>,
        salts: Arc<dyn SaltSource>,
    ) -> Self {
        Self {
            accounts,
            tokens,
            clock,
            salts,
        }
    }

    async fn existing_account(&self, user_id: i32) -> AppResult<Account> {
        self.accounts
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::forbidden(MSG_USER_NOT_EXISTS))
    }
}

#[async_trait]
impl AccountService for AccountManager {
    async fn register(&self, mut form: RegisterRequest) -> AppResult<RegisterResponse> {
        tracing::debug!("Registering account");
        form.validate()?;

        if self
            .accounts
            .find_by_phone(&form.phone_number)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(MSG_PHONE_NUMBER_EXISTS));
        }

        let salt = self.salts.random_string(ACCOUNT_SALT_LENGTH);
        let password_digest = credential::digest(&form.password, &salt);
        let now = to_local_time(self.clock.now());

        let account = self
            .accounts
            .create(NewAccount {
                full_name: form.full_name,
                phone_number: form.phone_number,
                password_digest,
                salt,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(user_id = account.id, "Account registered");

        Ok(RegisterResponse {
            user_id: account.id,
        })
    }

    async fn login(&self, form: LoginRequest) -> AppResult<LoginResponse> {
        tracing::debug!("Login attempt");
        form.validate()?;

        let account = self
            .accounts
            .find_by_phone(&form.phone_number)
            .await?
            .ok_or_else(|| AppError::validation(MSG_PHONE_NUMBER_NOT_REGISTERED))?;

        if !account.verify_password(&form.password) {
            tracing::warn!(user_id = account.id, "Login rejected: wrong password");
            return Err(AppError::unauthorized(MSG_WRONG_PASSWORD));
        }

        let issued = self
            .tokens
            .issue(account.id, &account.phone_number, self.clock.now())?;

        self.accounts.increment_login_count(account.id).await?;

        tracing::info!(user_id = account.id, "Login succeeded");

        Ok(LoginResponse {
            user_id: account.id,
            expired_at: issued.expired_at_rfc3339(),
            token: issued.token,
        })
    }

    async fn get_profile(&self, user_id: i32) -> AppResult<ProfileResponse> {
        tracing::debug!(user_id, "Loading profile");
        let account = self.existing_account(user_id).await?;

        Ok(ProfileResponse {
            full_name: account.full_name,
            phone_number: account.phone_number,
        })
    }

    async fn update_profile(&self, user_id: i32, form: UpdateProfileRequest) -> AppResult<()> {
        tracing::debug!(user_id, "Updating profile");
        form.validate()?;

        let account = self.existing_account(user_id).await?;

        // Any holder counts, including this same account.
        if !form.phone_number.is_empty()
            && self
                .accounts
                .find_by_phone(&form.phone_number)
                .await?
                .is_some()
        {
            return Err(AppError::conflict(MSG_PHONE_NUMBER_EXISTS));
        }

        self.accounts
            .update_profile(
                account.id,
                ProfileUpdate {
                    phone_number: form.phone_number,
                    full_name: form.full_name,
                    updated_at: to_local_time(self.clock.now()),
                },
            )
            .await?;

        tracing::info!(user_id = account.id, "Profile updated");

        Ok(())
    }
}
