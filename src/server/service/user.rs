//! User service for profile management.
//!
//! This module provides the `UserService` for reading and editing the profile of the
//! signed-in account and for changing its password. It works with domain models rather
//! than DTOs; controllers convert at the boundary.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpdateProfileParam, User},
    util::{
        password::{hash_password, verify_password},
        validate::{validate_password, validate_username},
    },
};

/// Service providing business logic for the signed-in user's account.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Updates the editable profile fields.
    ///
    /// # Arguments
    /// - `param` - Trimmed profile fields, blank optional fields already `None`
    ///
    /// # Returns
    /// - `Ok(User)` - The updated account
    /// - `Err(AppError::BadRequest(_))` - Empty or overlong username
    /// - `Err(AppError::NotFound(_))` - Account no longer exists
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn update_profile(&self, param: UpdateProfileParam) -> Result<User, AppError> {
        validate_username(&param.username)?;

        let user_id = param.user_id;
        let user_repo = UserRepository::new(self.db);

        user_repo
            .update_profile(param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }

    /// Replaces the password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AppError::BadRequest(_))` - Account signs in through an OAuth provider, or
    ///   the new password is too short
    /// - `Err(AppError::AuthErr(AuthError::InvalidCredentials))` - Current password is wrong
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn change_password(
        &self,
        user: &User,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if let Some(provider) = &user.external_source {
            return Err(AppError::BadRequest(format!(
                "This account signs in with {}, it has no password to change",
                provider
            )));
        }

        if !verify_password(current_password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        validate_password(new_password)?;

        let user_repo = UserRepository::new(self.db);
        user_repo
            .update_password(user.id, hash_password(new_password)?)
            .await?;

        Ok(())
    }
}
