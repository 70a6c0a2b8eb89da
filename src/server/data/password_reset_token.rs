//! Password reset token repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::token::{CreateTokenParam, PasswordResetToken};

pub struct PasswordResetTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PasswordResetTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateTokenParam) -> Result<PasswordResetToken, DbErr> {
        let entity = entity::password_reset_token::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            token: ActiveValue::Set(param.token),
            expires_at: ActiveValue::Set(param.expires_at),
            used: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PasswordResetToken::from_entity(entity))
    }

    pub async fn find_by_token(&self, token: &str) -> Result<Option<PasswordResetToken>, DbErr> {
        let entity = entity::prelude::PasswordResetToken::find()
            .filter(entity::password_reset_token::Column::Token.eq(token))
            .one(self.db)
            .await?;

        Ok(entity.map(PasswordResetToken::from_entity))
    }

    pub async fn delete(&self, token_id: i32) -> Result<(), DbErr> {
        entity::prelude::PasswordResetToken::delete_by_id(token_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Flags the token as redeemed so it cannot be used again.
    pub async fn mark_used(&self, token_id: i32) -> Result<(), DbErr> {
        entity::prelude::PasswordResetToken::update_many()
            .col_expr(entity::password_reset_token::Column::Used, Expr::value(true))
            .filter(entity::password_reset_token::Column::Id.eq(token_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes the user's tokens that have not been redeemed yet.
    ///
    /// Called before issuing a new token so only the latest reset link works.
    pub async fn delete_unused_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PasswordResetToken::delete_many()
            .filter(entity::password_reset_token::Column::UserId.eq(user_id))
            .filter(entity::password_reset_token::Column::Used.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes tokens that are expired or already redeemed.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted tokens
    pub async fn delete_expired_or_used(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::PasswordResetToken::delete_many()
            .filter(
                Condition::any()
                    .add(entity::password_reset_token::Column::ExpiresAt.lte(now))
                    .add(entity::password_reset_token::Column::Used.eq(true)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
