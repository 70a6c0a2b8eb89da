use dioxus_logger::tracing;
use sea_orm::{DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, RegisterParam, User},
    service::account::AccountService,
    util::{
        password::hash_password,
        token::{generate_random_code, TOKEN_LENGTH},
        validate::{validate_email, validate_password, validate_username},
    },
};

const EMAIL_TAKEN: &str = "Email address is already registered";

impl<'a> AccountService<'a> {
    /// Creates an inactive account and sends the email confirmation link.
    ///
    /// # Returns
    /// - `Ok(User)` - The new account, `active == false`
    /// - `Err(AppError::BadRequest(_))` - Invalid input or email already registered
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn register(&self, param: RegisterParam) -> Result<User, AppError> {
        validate_username(&param.username)?;
        validate_email(&param.email)?;
        validate_password(&param.password)?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.email_exists(&param.email).await? {
            return Err(AppError::BadRequest(EMAIL_TAKEN.to_string()));
        }

        let user = user_repo
            .create(CreateUserParam {
                username: param.username,
                email: param.email,
                password_hash: hash_password(&param.password)?,
                active: false,
                activation_code: Some(generate_random_code(TOKEN_LENGTH)),
                first_name: param.first_name,
                last_name: param.last_name,
                external_source: None,
            })
            .await
            .map_err(email_conflict)?;

        tracing::info!("Registered user {}", user.id);

        self.issue_email_confirmation(&user).await?;

        Ok(user)
    }
}

/// Maps a unique email violation on insert to the known-address error. A concurrent
/// registration can pass `email_exists` and still hit the index.
fn email_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::BadRequest(EMAIL_TAKEN.to_string())
        }
        _ => err.into(),
    }
}
