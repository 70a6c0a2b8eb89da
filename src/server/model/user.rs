//! User domain models and parameters.
//!
//! Provides the account model backed by the legacy `users` table and the parameter
//! types for registration, OAuth sign-up and profile edits.

use chrono::{DateTime, Utc};

use crate::model::{
    auth::RegisterDto,
    user::{ProfileDto, UpdateProfileDto, UserDto},
};

/// Account row with the numeric `active` flag decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// bcrypt hash of the password.
    pub password_hash: String,
    /// Whether the email address has been confirmed.
    pub active: bool,
    pub activation_code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub country: Option<String>,
    pub bio: Option<String>,
    /// Public path of the avatar, e.g. `/avatars/12-1700000000.png`.
    pub image: Option<String>,
    /// OAuth provider the account was created through.
    pub external_source: Option<String>,
    pub created_on: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            image: self.image,
        }
    }

    pub fn into_profile_dto(self) -> ProfileDto {
        ProfileDto {
            id: self.id,
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            company: self.company,
            country: self.country,
            bio: self.bio,
            image: self.image,
            external_source: self.external_source,
            created_on: self.created_on.timestamp(),
            last_login: self.last_login.map(|at| at.timestamp()),
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// Legacy rows store timestamps as unix seconds; out of range values fall back to
    /// the unix epoch.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password,
            active: entity.active != 0,
            activation_code: entity.activation_code,
            first_name: entity.first_name,
            last_name: entity.last_name,
            company: entity.company,
            country: entity.country,
            bio: entity.bio,
            image: entity.image,
            external_source: entity.external_source,
            created_on: DateTime::from_timestamp(entity.created_on, 0).unwrap_or_default(),
            last_login: entity
                .last_login
                .and_then(|seconds| DateTime::from_timestamp(seconds, 0)),
        }
    }
}

/// Parameters for inserting a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub active: bool,
    pub activation_code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub external_source: Option<String>,
}

/// Self-service sign-up with surrounding whitespace removed.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl RegisterParam {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            email: dto.email.trim().to_string(),
            password: dto.password,
            first_name: non_blank(dto.first_name),
            last_name: non_blank(dto.last_name),
        }
    }
}

/// Parameters for updating the editable profile fields.
///
/// Blank optional fields are stored as NULL.
#[derive(Debug, Clone)]
pub struct UpdateProfileParam {
    pub user_id: i32,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub country: Option<String>,
    pub bio: Option<String>,
}

impl UpdateProfileParam {
    pub fn from_dto(user_id: i32, dto: UpdateProfileDto) -> Self {
        Self {
            user_id,
            username: dto.username.trim().to_string(),
            first_name: non_blank(dto.first_name),
            last_name: non_blank(dto.last_name),
            company: non_blank(dto.company),
            country: non_blank(dto.country),
            bio: non_blank(dto.bio),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
