//! Passkey repository.
//!
//! Every lookup that is driven by a user request is scoped to the owning user, so a
//! passkey id belonging to someone else behaves like a missing row.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::passkey::{CreatePasskeyParam, Passkey, PasskeyUsageParam};

pub struct PasskeyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PasskeyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreatePasskeyParam) -> Result<Passkey, DbErr> {
        let entity = entity::passkey::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            credential_id: ActiveValue::Set(param.credential_id),
            public_key: ActiveValue::Set(param.public_key),
            counter: ActiveValue::Set(param.counter),
            device_name: ActiveValue::Set(param.device_name),
            created_at: ActiveValue::Set(Utc::now()),
            last_used_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Passkey::from_entity(entity))
    }

    /// Gets a user's passkeys, oldest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Passkey>, DbErr> {
        let entities = entity::prelude::Passkey::find()
            .filter(entity::passkey::Column::UserId.eq(user_id))
            .order_by_asc(entity::passkey::Column::CreatedAt)
            .order_by_asc(entity::passkey::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Passkey::from_entity).collect())
    }

    pub async fn find_by_credential_id(&self, credential_id: &str) -> Result<Option<Passkey>, DbErr> {
        let entity = entity::prelude::Passkey::find()
            .filter(entity::passkey::Column::CredentialId.eq(credential_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Passkey::from_entity))
    }

    /// Renames a passkey owned by `user_id`.
    ///
    /// # Returns
    /// - `Ok(Some(Passkey))` - Renamed passkey
    /// - `Ok(None)` - No passkey with that id owned by the user
    pub async fn rename(
        &self,
        passkey_id: i32,
        user_id: i32,
        device_name: String,
    ) -> Result<Option<Passkey>, DbErr> {
        let Some(entity) = entity::prelude::Passkey::find_by_id(passkey_id)
            .filter(entity::passkey::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::passkey::ActiveModel = entity.into();
        active_model.device_name = ActiveValue::Set(Some(device_name));

        let updated = active_model.update(self.db).await?;

        Ok(Some(Passkey::from_entity(updated)))
    }

    /// Deletes a passkey owned by `user_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - Passkey deleted
    /// - `Ok(false)` - No passkey with that id owned by the user
    pub async fn delete(&self, passkey_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Passkey::delete_many()
            .filter(entity::passkey::Column::Id.eq(passkey_id))
            .filter(entity::passkey::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Stores the updated credential record and counter after a login.
    pub async fn record_usage(
        &self,
        param: PasskeyUsageParam,
        at: DateTime<Utc>,
    ) -> Result<Option<Passkey>, DbErr> {
        let Some(entity) = entity::prelude::Passkey::find_by_id(param.passkey_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::passkey::ActiveModel = entity.into();
        active_model.public_key = ActiveValue::Set(param.public_key);
        active_model.counter = ActiveValue::Set(param.counter);
        active_model.last_used_at = ActiveValue::Set(Some(at));

        let updated = active_model.update(self.db).await?;

        Ok(Some(Passkey::from_entity(updated)))
    }
}
