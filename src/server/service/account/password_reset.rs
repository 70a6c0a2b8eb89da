use chrono::Utc;
use dioxus_logger::tracing;

use crate::server::{
    data::{password_reset_token::PasswordResetTokenRepository, user::UserRepository},
    error::AppError,
    model::token::{CreateTokenParam, PASSWORD_RESET_TTL},
    service::{account::AccountService, email::EmailMessage},
    util::{
        password::hash_password,
        token::{generate_random_code, TOKEN_LENGTH},
        validate::validate_password,
    },
};

const INVALID_RESET: &str = "This password reset link is invalid or has already been used";
const EXPIRED_RESET: &str = "This password reset link has expired, please request a new one";

impl<'a> AccountService<'a> {
    /// Emails a password reset link when the address belongs to an account.
    ///
    /// Outstanding unused tokens of the account are replaced. Unknown addresses are
    /// ignored so the response never reveals whether an account exists.
    pub async fn forgot_password(&self, email: &str) -> Result<(), AppError> {
        let token_repo = PasswordResetTokenRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            tracing::debug!("Password reset requested for unknown address");
            return Ok(());
        };

        token_repo.delete_unused_by_user(user.id).await?;

        let token = token_repo
            .create(CreateTokenParam {
                user_id: user.id,
                token: generate_random_code(TOKEN_LENGTH),
                expires_at: Utc::now() + PASSWORD_RESET_TTL,
            })
            .await?;

        let link = format!("{}/reset-password/{}", self.app_url, token.token);
        self.deliver(&user.email, EmailMessage::password_reset(&link))
            .await;

        Ok(())
    }

    /// Sets a new password using a reset token.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced and token marked used
    /// - `Err(AppError::BadRequest(_))` - Unknown, used or expired token, or weak password
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn reset_password(&self, token: &str, password: &str) -> Result<(), AppError> {
        let token_repo = PasswordResetTokenRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let Some(token) = token_repo.find_by_token(token.trim()).await? else {
            return Err(AppError::BadRequest(INVALID_RESET.to_string()));
        };

        if token.used {
            return Err(AppError::BadRequest(INVALID_RESET.to_string()));
        }

        if token.is_expired(Utc::now()) {
            token_repo.delete(token.id).await?;
            return Err(AppError::BadRequest(EXPIRED_RESET.to_string()));
        }

        validate_password(password)?;

        user_repo
            .update_password(token.user_id, hash_password(password)?)
            .await?;
        token_repo.mark_used(token.id).await?;

        tracing::info!("Reset password of user {}", token.user_id);

        Ok(())
    }
}
