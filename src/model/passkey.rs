use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PasskeyDto {
    pub id: i32,
    pub device_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct RenamePasskeyDto {
    pub device_name: String,
}

/// Completes a passkey registration.
///
/// `credential` is the JSON form of the browser's `PublicKeyCredential` as produced by
/// `credential.toJSON()`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PasskeyRegisterFinishDto {
    #[serde(default)]
    pub device_name: Option<String>,
    pub credential: serde_json::Value,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PasskeyLoginStartDto {
    pub email: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PasskeyLoginFinishDto {
    pub credential: serde_json::Value,
}
