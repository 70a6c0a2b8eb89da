use chrono::Utc;
use dioxus_logger::tracing;

use crate::server::{
    data::{email_confirmation_token::EmailConfirmationTokenRepository, user::UserRepository},
    error::AppError,
    model::user::User,
    service::account::AccountService,
};

const INVALID_CONFIRMATION: &str = "This confirmation link is invalid";
const EXPIRED_CONFIRMATION: &str =
    "This confirmation link has expired, please request a new one";

impl<'a> AccountService<'a> {
    /// Activates the account a confirmation token was issued for.
    ///
    /// An expired token is deleted before the request is rejected. On success every
    /// confirmation token of the user is removed.
    ///
    /// # Returns
    /// - `Ok(User)` - The activated account
    /// - `Err(AppError::BadRequest(_))` - Unknown or expired token
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn confirm_email(&self, token: &str) -> Result<User, AppError> {
        let token_repo = EmailConfirmationTokenRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let Some(token) = token_repo.find_by_token(token.trim()).await? else {
            return Err(AppError::BadRequest(INVALID_CONFIRMATION.to_string()));
        };

        if token.is_expired(Utc::now()) {
            token_repo.delete(token.id).await?;
            return Err(AppError::BadRequest(EXPIRED_CONFIRMATION.to_string()));
        }

        let Some(user) = user_repo.find_by_id(token.user_id).await? else {
            token_repo.delete_by_user(token.user_id).await?;
            return Err(AppError::BadRequest(INVALID_CONFIRMATION.to_string()));
        };

        user_repo.activate(user.id).await?;
        token_repo.delete_by_user(user.id).await?;

        tracing::info!("Confirmed email of user {}", user.id);

        Ok(User {
            active: true,
            activation_code: None,
            ..user
        })
    }

    /// Replaces the confirmation tokens of an inactive account and sends a new link.
    ///
    /// Unknown and already active addresses are ignored so the response never reveals
    /// whether an account exists.
    pub async fn resend_confirmation(&self, email: &str) -> Result<(), AppError> {
        let token_repo = EmailConfirmationTokenRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            tracing::debug!("Confirmation resend requested for unknown address");
            return Ok(());
        };

        if user.active {
            return Ok(());
        }

        token_repo.delete_by_user(user.id).await?;
        self.issue_email_confirmation(&user).await?;

        Ok(())
    }
}
