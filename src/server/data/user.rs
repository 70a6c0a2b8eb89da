//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for reading and updating rows of the legacy
//! `users` table. The numeric `active` flag and unix-second timestamps are converted at
//! this boundary.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParam, UpdateProfileParam, User};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// # Arguments
    /// - `param` - Username, email, password hash, activation state and optional names
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique email violations
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password_hash),
            activation_code: ActiveValue::Set(param.activation_code),
            active: ActiveValue::Set(if param.active { 1 } else { 0 }),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            company: ActiveValue::Set(None),
            country: ActiveValue::Set(None),
            bio: ActiveValue::Set(None),
            image: ActiveValue::Set(None),
            external_source: ActiveValue::Set(param.external_source),
            created_on: ActiveValue::Set(Utc::now().timestamp()),
            last_login: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email address, ignoring surrounding whitespace.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.trim()))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds the user a login form refers to, by email address or username.
    ///
    /// Email matches take precedence over username matches.
    pub async fn find_by_login(&self, login: &str) -> Result<Option<User>, DbErr> {
        if let Some(user) = self.find_by_email(login).await? {
            return Ok(Some(user));
        }

        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(login.trim()))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks whether an account already uses the email address.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.trim()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Marks the account as confirmed and clears its legacy activation code.
    ///
    /// # Returns
    /// - `Ok(true)` - The user was activated
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn activate(&self, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::Active, Expr::value(1))
            .col_expr(
                entity::user::Column::ActivationCode,
                Expr::value(Option::<String>::None),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Replaces the stored password hash.
    pub async fn update_password(&self, user_id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(entity::user::Column::Password, Expr::value(password_hash))
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Records a successful login.
    pub async fn update_last_login(&self, user_id: i32, at: DateTime<Utc>) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(entity::user::Column::LastLogin, Expr::value(at.timestamp()))
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Updates the editable profile fields.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(&self, param: UpdateProfileParam) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(param.user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = entity.into();
        active_model.username = ActiveValue::Set(param.username);
        active_model.first_name = ActiveValue::Set(param.first_name);
        active_model.last_name = ActiveValue::Set(param.last_name);
        active_model.company = ActiveValue::Set(param.company);
        active_model.country = ActiveValue::Set(param.country);
        active_model.bio = ActiveValue::Set(param.bio);

        let updated = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Sets or clears the avatar path.
    pub async fn set_image(&self, user_id: i32, image: Option<String>) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(entity::user::Column::Image, Expr::value(image))
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
