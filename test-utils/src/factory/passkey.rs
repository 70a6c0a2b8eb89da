use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for passkey rows.
///
/// The stored `public_key` defaults to an empty JSON object, which is enough for listing,
/// renaming and deleting. Tests exercising WebAuthn verification must supply a real
/// serialized credential.
pub struct PasskeyFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    credential_id: String,
    public_key: String,
    device_name: Option<String>,
}

impl<'a> PasskeyFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            credential_id: format!("credential{}", next_id()),
            public_key: "{}".to_string(),
            device_name: None,
        }
    }

    pub fn credential_id(mut self, credential_id: impl Into<String>) -> Self {
        self.credential_id = credential_id.into();
        self
    }

    pub fn device_name(mut self, device_name: impl Into<String>) -> Self {
        self.device_name = Some(device_name.into());
        self
    }

    pub async fn build(self) -> Result<entity::passkey::Model, DbErr> {
        entity::passkey::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            credential_id: ActiveValue::Set(self.credential_id),
            public_key: ActiveValue::Set(self.public_key),
            counter: ActiveValue::Set(0),
            device_name: ActiveValue::Set(self.device_name),
            created_at: ActiveValue::Set(Utc::now()),
            last_used_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a passkey for the given user.
pub async fn create_passkey(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::passkey::Model, DbErr> {
    PasskeyFactory::new(db, user_id).build().await
}
