use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for password reset tokens. Tokens are valid for one hour by default.
pub struct PasswordResetTokenFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    token: String,
    expires_at: DateTime<Utc>,
    used: bool,
}

impl<'a> PasswordResetTokenFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            token: format!("reset{}", next_id()),
            expires_at: Utc::now() + Duration::hours(1),
            used: false,
        }
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn expired(mut self) -> Self {
        self.expires_at = Utc::now() - Duration::minutes(5);
        self
    }

    pub fn used(mut self) -> Self {
        self.used = true;
        self
    }

    pub async fn build(self) -> Result<entity::password_reset_token::Model, DbErr> {
        entity::password_reset_token::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            token: ActiveValue::Set(self.token),
            expires_at: ActiveValue::Set(self.expires_at),
            used: ActiveValue::Set(self.used),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a valid reset token for a new active user.
pub async fn create_password_reset_token(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::password_reset_token::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let token = PasswordResetTokenFactory::new(db, user.id).build().await?;

    Ok((user, token))
}
