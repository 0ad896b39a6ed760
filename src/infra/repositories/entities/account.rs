//! SeaORM entity for the `accounts` table.

use sea_orm::entity::prelude::*;

use crate::domain::Account;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    /// NULL once cleared so that several cleared accounts can coexist.
    #[sea_orm(unique)]
    pub phone_number: Option<String>,
    pub password: String,
    pub account_salt: String,
    pub successful_login: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Account {
    fn from(model: Model) -> Self {
        Account {
            id: model.id,
            full_name: model.full_name,
            phone_number: model.phone_number.unwrap_or_default(),
            password_digest: model.password,
            salt: model.account_salt,
            successful_login: model.successful_login,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Column value for a phone number; empty becomes NULL.
pub fn phone_column(phone_number: String) -> Option<String> {
    if phone_number.is_empty() {
        None
    } else {
        Some(phone_number)
    }
}
