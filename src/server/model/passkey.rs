//! Registered WebAuthn credentials.

use chrono::{DateTime, Utc};

use crate::model::passkey::PasskeyDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Passkey {
    pub id: i32,
    pub user_id: i32,
    /// Base64url credential id as sent by the browser.
    pub credential_id: String,
    /// JSON form of the verified credential record.
    pub public_key: String,
    /// Last seen signature counter.
    pub counter: i64,
    pub device_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
}

impl Passkey {
    pub fn into_dto(self) -> PasskeyDto {
        PasskeyDto {
            id: self.id,
            device_name: self.device_name,
            created_at: self.created_at,
            last_used_at: self.last_used_at,
        }
    }

    pub fn from_entity(entity: entity::passkey::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            credential_id: entity.credential_id,
            public_key: entity.public_key,
            counter: entity.counter,
            device_name: entity.device_name,
            created_at: entity.created_at,
            last_used_at: entity.last_used_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePasskeyParam {
    pub user_id: i32,
    pub credential_id: String,
    pub public_key: String,
    pub counter: i64,
    pub device_name: Option<String>,
}

/// Credential state written back after a successful assertion.
#[derive(Debug, Clone)]
pub struct PasskeyUsageParam {
    pub passkey_id: i32,
    pub public_key: String,
    pub counter: i64,
}
