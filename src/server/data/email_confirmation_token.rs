//! Email confirmation token repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::token::{CreateTokenParam, EmailConfirmationToken};

pub struct EmailConfirmationTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmailConfirmationTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new confirmation token.
    ///
    /// # Returns
    /// - `Ok(EmailConfirmationToken)` - The stored token
    /// - `Err(DbErr)` - Database error, including duplicate token values
    pub async fn create(&self, param: CreateTokenParam) -> Result<EmailConfirmationToken, DbErr> {
        let entity = entity::email_confirmation_token::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            token: ActiveValue::Set(param.token),
            expires_at: ActiveValue::Set(param.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(EmailConfirmationToken::from_entity(entity))
    }

    pub async fn find_by_token(&self, token: &str) -> Result<Option<EmailConfirmationToken>, DbErr> {
        let entity = entity::prelude::EmailConfirmationToken::find()
            .filter(entity::email_confirmation_token::Column::Token.eq(token))
            .one(self.db)
            .await?;

        Ok(entity.map(EmailConfirmationToken::from_entity))
    }

    pub async fn delete(&self, token_id: i32) -> Result<(), DbErr> {
        entity::prelude::EmailConfirmationToken::delete_by_id(token_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes every confirmation token of a user.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted tokens
    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::EmailConfirmationToken::delete_many()
            .filter(entity::email_confirmation_token::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes tokens whose expiry is at or before `now`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted tokens
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::EmailConfirmationToken::delete_many()
            .filter(entity::email_confirmation_token::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
