//! Password login.

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    util::password::verify_password,
};

/// Service authenticating users against the legacy `users` table.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks a password login and records the login time.
    ///
    /// The password is verified before the activation flag so that the activation state
    /// of an account is only revealed to someone who knows its password.
    ///
    /// # Arguments
    /// - `login` - Email address or username
    /// - `password` - Plain text password
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid and account active
    /// - `Err(AppError::AuthErr(AuthError::InvalidCredentials))` - Unknown user or wrong password
    /// - `Err(AppError::AuthErr(AuthError::AccountNotActivated(_)))` - Email not confirmed yet
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn login(&self, login: &str, password: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_login(login).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.active {
            return Err(AuthError::AccountNotActivated(user.id).into());
        }

        let now = Utc::now();
        user_repo.update_last_login(user.id, now).await?;

        tracing::debug!("User {} logged in with password", user.id);

        Ok(User {
            last_login: Some(now),
            ..user
        })
    }
}
