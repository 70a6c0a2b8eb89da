//! One-time account tokens.

use chrono::{DateTime, Duration, Utc};

/// Lifetime of an email confirmation token.
pub const EMAIL_CONFIRMATION_TTL: Duration = Duration::hours(24);

/// Lifetime of a password reset token.
pub const PASSWORD_RESET_TTL: Duration = Duration::hours(1);

#[derive(Debug, Clone, PartialEq)]
pub struct EmailConfirmationToken {
    pub id: i32,
    pub user_id: i32,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl EmailConfirmationToken {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    pub fn from_entity(entity: entity::email_confirmation_token::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            token: entity.token,
            expires_at: entity.expires_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PasswordResetToken {
    pub id: i32,
    pub user_id: i32,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
}

impl PasswordResetToken {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    pub fn from_entity(entity: entity::password_reset_token::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            token: entity.token,
            expires_at: entity.expires_at,
            used: entity.used,
        }
    }
}

/// Parameters for storing a freshly generated token of either kind.
#[derive(Debug, Clone)]
pub struct CreateTokenParam {
    pub user_id: i32,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
