//! Account repository - persistence port and its SeaORM store.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter, Set,
};

use super::entities::account::{self, phone_column};
use crate::domain::{Account, NewAccount, ProfileUpdate};
use crate::errors::StoreResult;

/// Account persistence operations.
///
/// A phone number already held by another account surfaces as
/// `StoreError::DuplicatePhone`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_by_phone(&self, phone_number: &str) -> StoreResult<Option<Account>>;

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Account>>;

    /// Insert a new account with a zero login counter and return it with its ID.
    async fn create(&self, account: NewAccount) -> StoreResult<Account>;

    /// Overwrite phone number, full name and update time.
    async fn update_profile(&self, id: i32, update: ProfileUpdate) -> StoreResult<()>;

    /// Atomically add one to the successful login counter.
    async fn increment_login_count(&self, id: i32) -> StoreResult<()>;
}

/// PostgreSQL-backed account store.
#[derive(Clone)]
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn find_by_phone(&self, phone_number: &str) -> StoreResult<Option<Account>> {
        let model = account::Entity::find()
            .filter(account::Column::PhoneNumber.eq(phone_number))
            .one(&self.db)
            .await?;

        Ok(model.map(Account::from))
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Account>> {
        let model = account::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Account::from))
    }

    async fn create(&self, account: NewAccount) -> StoreResult<Account> {
        let active_model = account::ActiveModel {
            id: NotSet,
            full_name: Set(account.full_name),
            phone_number: Set(phone_column(account.phone_number)),
            password: Set(account.password_digest),
            account_salt: Set(account.salt),
            successful_login: Set(0),
            created_at: Set(account.created_at),
            updated_at: Set(Some(account.updated_at)),
        };

        let model = active_model.insert(&self.db).await?;
        tracing::debug!(account_id = model.id, "Account row inserted");

        Ok(Account::from(model))
    }

    async fn update_profile(&self, id: i32, update: ProfileUpdate) -> StoreResult<()> {
        account::Entity::update_many()
            .col_expr(
                account::Column::PhoneNumber,
                Expr::value(phone_column(update.phone_number)),
            )
            .col_expr(account::Column::FullName, Expr::value(update.full_name))
            .col_expr(account::Column::UpdatedAt, Expr::value(update.updated_at))
            .filter(account::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(())
    }

    async fn increment_login_count(&self, id: i32) -> StoreResult<()> {
        account::Entity::update_many()
            .col_expr(
                account::Column::SuccessfulLogin,
                Expr::col(account::Column::SuccessfulLogin).add(1),
            )
            .filter(account::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(())
    }
}
