//! Passkey management and the browser side of the WebAuthn ceremonies.
//!
//! Challenge options from the server are handed to `navigator.credentials` through
//! `document::eval`; the resulting credential comes back as `credential.toJSON()`.

use dioxus::prelude::document;
use serde_json::Value;

use crate::{
    client::{
        api::helper::{
            browser_error, delete, get, parse_empty_response, parse_response, patch, post,
            send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::{
        passkey::{
            PasskeyDto, PasskeyLoginFinishDto, PasskeyLoginStartDto, PasskeyRegisterFinishDto,
            RenamePasskeyDto,
        },
        user::UserDto,
    },
};

const CREATE_CREDENTIAL: &str = r#"
    const options = await dioxus.recv();
    try {
        const publicKey = PublicKeyCredential.parseCreationOptionsFromJSON(options.publicKey);
        const credential = await navigator.credentials.create({ publicKey });
        dioxus.send({ ok: true, credential: credential.toJSON() });
    } catch (e) {
        dioxus.send({ ok: false, error: String(e) });
    }
"#;

const GET_CREDENTIAL: &str = r#"
    const options = await dioxus.recv();
    try {
        const publicKey = PublicKeyCredential.parseRequestOptionsFromJSON(options.publicKey);
        const credential = await navigator.credentials.get({ publicKey });
        dioxus.send({ ok: true, credential: credential.toJSON() });
    } catch (e) {
        dioxus.send({ ok: false, error: String(e) });
    }
"#;

#[derive(serde::Deserialize)]
struct CeremonyReply {
    ok: bool,
    #[serde(default)]
    credential: Value,
    #[serde(default)]
    error: Option<String>,
}

/// Runs one browser ceremony with the given options.
async fn run_ceremony(script: &str, options: Value) -> Result<Value, ApiError> {
    let mut eval = document::eval(script);
    eval.send(options).map_err(browser_error)?;
    let reply: CeremonyReply = eval.recv().await.map_err(browser_error)?;

    if reply.ok {
        Ok(reply.credential)
    } else {
        Err(ApiError {
            status: 400,
            message: reply
                .error
                .unwrap_or_else(|| "Passkey prompt was cancelled".to_string()),
        })
    }
}

pub async fn get_passkeys() -> Result<Vec<PasskeyDto>, ApiError> {
    let response = send_request(get("/api/user/passkeys")).await?;
    parse_response(response).await
}

pub async fn rename_passkey(id: i32, device_name: String) -> Result<PasskeyDto, ApiError> {
    let url = format!("/api/user/passkeys/{}", id);
    let body = serialize_json(&RenamePasskeyDto { device_name })?;

    let response = send_request(patch(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_passkey(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/user/passkeys/{}", id);

    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

/// Registers a new passkey for the logged-in user.
pub async fn register_passkey(device_name: Option<String>) -> Result<PasskeyDto, ApiError> {
    let response = send_request(post("/api/passkey/register/start")).await?;
    let options: Value = parse_response(response).await?;

    let credential = run_ceremony(CREATE_CREDENTIAL, options).await?;

    let body = serialize_json(&PasskeyRegisterFinishDto {
        device_name,
        credential,
    })?;
    let response = send_request(post("/api/passkey/register/finish").body(body)).await?;
    parse_response(response).await
}

/// Logs in with a passkey of the account registered under `email`.
pub async fn login_with_passkey(email: String) -> Result<UserDto, ApiError> {
    let body = serialize_json(&PasskeyLoginStartDto { email })?;
    let response = send_request(post("/api/passkey/login/start").body(body)).await?;
    let options: Value = parse_response(response).await?;

    let credential = run_ceremony(GET_CREDENTIAL, options).await?;

    let body = serialize_json(&PasskeyLoginFinishDto { credential })?;
    let response = send_request(post("/api/passkey/login/finish").body(body)).await?;
    parse_response(response).await
}
