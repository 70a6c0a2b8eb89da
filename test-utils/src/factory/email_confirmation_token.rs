use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for email confirmation tokens. Tokens are valid for 24 hours by default.
pub struct EmailConfirmationTokenFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    token: String,
    expires_at: DateTime<Utc>,
}

impl<'a> EmailConfirmationTokenFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            token: format!("confirm{}", next_id()),
            expires_at: Utc::now() + Duration::hours(24),
        }
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Makes the token expire one hour in the past.
    pub fn expired(mut self) -> Self {
        self.expires_at = Utc::now() - Duration::hours(1);
        self
    }

    pub async fn build(self) -> Result<entity::email_confirmation_token::Model, DbErr> {
        entity::email_confirmation_token::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            token: ActiveValue::Set(self.token),
            expires_at: ActiveValue::Set(self.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a valid confirmation token for a new inactive user.
///
/// # Returns
/// - `Ok((user, token))` - The created user and their token
pub async fn create_email_confirmation_token(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::email_confirmation_token::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await?;
    let token = EmailConfirmationTokenFactory::new(db, user.id).build().await?;

    Ok((user, token))
}
