//! WebAuthn passkeys.
//!
//! Ceremonies are delegated to `webauthn-rs`. This service keeps the credential records:
//! the verified credential is stored as JSON in `public_key`, its base64url id in
//! `credential_id` and the signature counter alongside for display and auditing.

use sea_orm::DatabaseConnection;
use webauthn_rs::{
    prelude::{CredentialID, Passkey as Credential},
    Webauthn,
};

use crate::server::{
    data::passkey::PasskeyRepository,
    error::{internal::InternalError, AppError},
    model::passkey::Passkey,
};

pub mod authentication;
pub mod registration;

/// Longest accepted device name.
const MAX_DEVICE_NAME_LENGTH: usize = 100;

pub struct PasskeyService<'a> {
    pub db: &'a DatabaseConnection,
    pub webauthn: &'a Webauthn,
}

impl<'a> PasskeyService<'a> {
    pub fn new(db: &'a DatabaseConnection, webauthn: &'a Webauthn) -> Self {
        Self { db, webauthn }
    }

    /// Passkeys of a user, oldest first.
    pub async fn list(&self, user_id: i32) -> Result<Vec<Passkey>, AppError> {
        let passkey_repo = PasskeyRepository::new(self.db);
        Ok(passkey_repo.get_by_user(user_id).await?)
    }

    /// Renames a passkey of `user_id`.
    ///
    /// # Returns
    /// - `Ok(Passkey)` - Renamed passkey
    /// - `Err(AppError::BadRequest(_))` - Blank or overlong name
    /// - `Err(AppError::NotFound(_))` - No such passkey owned by the user
    pub async fn rename(
        &self,
        passkey_id: i32,
        user_id: i32,
        device_name: &str,
    ) -> Result<Passkey, AppError> {
        let device_name = normalize_device_name(Some(device_name))
            .ok_or_else(|| AppError::BadRequest("Device name is required".to_string()))?;

        let passkey_repo = PasskeyRepository::new(self.db);

        passkey_repo
            .rename(passkey_id, user_id, device_name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Passkey {} not found", passkey_id)))
    }

    /// Deletes a passkey of `user_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Passkey removed
    /// - `Err(AppError::NotFound(_))` - No such passkey owned by the user
    pub async fn delete(&self, passkey_id: i32, user_id: i32) -> Result<(), AppError> {
        let passkey_repo = PasskeyRepository::new(self.db);

        if !passkey_repo.delete(passkey_id, user_id).await? {
            return Err(AppError::NotFound(format!(
                "Passkey {} not found",
                passkey_id
            )));
        }

        Ok(())
    }
}

/// Trims a device name, truncating it to the column limit. Blank names become `None`.
fn normalize_device_name(name: Option<&str>) -> Option<String> {
    let name = name?.trim();
    if name.is_empty() {
        return None;
    }

    Some(name.chars().take(MAX_DEVICE_NAME_LENGTH).collect())
}

/// Decodes the credential stored with a passkey row.
fn decode_credential(passkey: &Passkey) -> Result<Credential, AppError> {
    serde_json::from_str(&passkey.public_key).map_err(|e| {
        InternalError::CorruptPasskey {
            passkey_id: passkey.id,
            reason: e.to_string(),
        }
        .into()
    })
}

/// Base64url text form of a credential id, as stored in `credential_id`.
fn encode_credential_id(id: &CredentialID) -> Result<String, AppError> {
    match serde_json::to_value(id)? {
        serde_json::Value::String(encoded) => Ok(encoded),
        other => Err(AppError::InternalError(format!(
            "Unexpected credential id encoding: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_names_are_trimmed_and_bounded() {
        assert_eq!(
            normalize_device_name(Some("  Laptop  ")).as_deref(),
            Some("Laptop")
        );
        assert_eq!(normalize_device_name(Some("   ")), None);
        assert_eq!(normalize_device_name(None), None);

        let long = "x".repeat(300);
        assert_eq!(
            normalize_device_name(Some(&long)).map(|n| n.len()),
            Some(MAX_DEVICE_NAME_LENGTH)
        );
    }
}
