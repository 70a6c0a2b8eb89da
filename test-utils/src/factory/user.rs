//! User factory for creating legacy account rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Placeholder stored in the password column when a test does not need to log in.
pub const DEFAULT_PASSWORD_HASH: &str = "$2b$04$placeholderplaceholderplaceholderplaceholderplaceho";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .username("ada")
///     .email("ada@example.org")
///     .active(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    password: String,
    active: bool,
    activation_code: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    image: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"`
    /// - email: `"user{id}@example.org"`
    /// - password: [`DEFAULT_PASSWORD_HASH`]
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            email: format!("user{}@example.org", id),
            password: DEFAULT_PASSWORD_HASH.to_string(),
            active: true,
            activation_code: None,
            first_name: None,
            last_name: None,
            image: None,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash. The value is written as-is.
    pub fn password_hash(mut self, hash: impl Into<String>) -> Self {
        self.password = hash.into();
        self
    }

    /// Sets the activation flag. Inactive users get an activation code.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        if !active && self.activation_code.is_none() {
            self.activation_code = Some(format!("activation{}", next_id()));
        }
        self
    }

    pub fn name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Builds and inserts the user row.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            activation_code: ActiveValue::Set(self.activation_code),
            active: ActiveValue::Set(if self.active { 1 } else { 0 }),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            company: ActiveValue::Set(None),
            country: ActiveValue::Set(None),
            bio: ActiveValue::Set(None),
            image: ActiveValue::Set(self.image),
            external_source: ActiveValue::Set(None),
            created_on: ActiveValue::Set(Utc::now().timestamp()),
            last_login: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
