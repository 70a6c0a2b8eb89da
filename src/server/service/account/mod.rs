//! Self-service account flows driven by one-time tokens.
//!
//! Registration issues an email confirmation token, confirming it activates the account.
//! Password resets issue a separate token that is marked used once consumed. Tokens are
//! looked up by value and only checked for expiry and the `used` flag here; the hourly
//! cleanup job removes whatever is left behind.

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::email_confirmation_token::EmailConfirmationTokenRepository,
    error::AppError,
    model::{
        token::{CreateTokenParam, EMAIL_CONFIRMATION_TTL},
        user::User,
    },
    service::email::{EmailMessage, EmailService},
    util::token::{generate_random_code, TOKEN_LENGTH},
};

pub mod confirmation;
pub mod password_reset;
pub mod register;

pub struct AccountService<'a> {
    pub db: &'a DatabaseConnection,
    pub email: &'a EmailService,
    /// Base URL used for links in emails.
    pub app_url: &'a str,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection, email: &'a EmailService, app_url: &'a str) -> Self {
        Self { db, email, app_url }
    }

    /// Stores a new confirmation token for `user` and emails the link.
    ///
    /// Delivery failures are logged and swallowed: the account is usable once confirmed
    /// and the user can ask for the email again.
    async fn issue_email_confirmation(&self, user: &User) -> Result<(), AppError> {
        let token_repo = EmailConfirmationTokenRepository::new(self.db);

        let token = token_repo
            .create(CreateTokenParam {
                user_id: user.id,
                token: generate_random_code(TOKEN_LENGTH),
                expires_at: Utc::now() + EMAIL_CONFIRMATION_TTL,
            })
            .await?;

        let link = format!("{}/confirm-email/{}", self.app_url, token.token);
        self.deliver(&user.email, EmailMessage::email_confirmation(&link))
            .await;

        Ok(())
    }

    async fn deliver(&self, to: &str, message: EmailMessage) {
        if let Err(e) = self.email.send(to, &message).await {
            tracing::warn!("Failed to send \"{}\" to {}: {}", message.subject, to, e);
        }
    }
}
