use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        passkey::{
            PasskeyDto, PasskeyLoginFinishDto, PasskeyLoginStartDto, PasskeyRegisterFinishDto,
            RenamePasskeyDto,
        },
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::{AuthSession, PasskeySession},
        },
        service::passkey::PasskeyService,
        state::AppState,
    },
};

pub static PASSKEY_TAG: &str = "passkey";

#[utoipa::path(
    get,
    path = "/api/user/passkeys",
    tag = PASSKEY_TAG,
    responses(
        (status = 200, description = "Passkeys of the logged-in user", body = Vec<PasskeyDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_passkeys(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let passkeys = PasskeyService::new(&state.db, &state.webauthn)
        .list(user.id)
        .await?;

    let dtos: Vec<PasskeyDto> = passkeys.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    patch,
    path = "/api/user/passkeys/{id}",
    tag = PASSKEY_TAG,
    params(
        ("id" = i32, Path, description = "Passkey ID")
    ),
    request_body = RenamePasskeyDto,
    responses(
        (status = 200, description = "Passkey renamed", body = PasskeyDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Passkey not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn rename_passkey(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<RenamePasskeyDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let passkey = PasskeyService::new(&state.db, &state.webauthn)
        .rename(id, user.id, &payload.device_name)
        .await?;

    Ok((StatusCode::OK, Json(passkey.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/user/passkeys/{id}",
    tag = PASSKEY_TAG,
    params(
        ("id" = i32, Path, description = "Passkey ID")
    ),
    responses(
        (status = 204, description = "Passkey deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Passkey not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_passkey(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    PasskeyService::new(&state.db, &state.webauthn)
        .delete(id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Returns WebAuthn creation options for a new passkey.
#[utoipa::path(
    post,
    path = "/api/passkey/register/start",
    tag = PASSKEY_TAG,
    responses(
        (status = 200, description = "Creation options for navigator.credentials.create", body = serde_json::Value),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Email address not confirmed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_start(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ActiveAccount])
        .await?;

    let (options, registration) = PasskeyService::new(&state.db, &state.webauthn)
        .start_registration(&user)
        .await?;

    PasskeySession::new(&session)
        .set_registration(registration)
        .await?;

    Ok((StatusCode::OK, Json(options)))
}

#[utoipa::path(
    post,
    path = "/api/passkey/register/finish",
    tag = PASSKEY_TAG,
    request_body = PasskeyRegisterFinishDto,
    responses(
        (status = 201, description = "Passkey stored", body = PasskeyDto),
        (status = 400, description = "No registration in progress or verification failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_finish(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PasskeyRegisterFinishDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ActiveAccount])
        .await?;

    let registration = PasskeySession::new(&session).require_registration().await?;

    let passkey = PasskeyService::new(&state.db, &state.webauthn)
        .finish_registration(
            user.id,
            &registration,
            payload.credential,
            payload.device_name.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(passkey.into_dto())))
}

/// Returns WebAuthn request options for the passkeys of an account.
#[utoipa::path(
    post,
    path = "/api/passkey/login/start",
    tag = PASSKEY_TAG,
    request_body = PasskeyLoginStartDto,
    responses(
        (status = 200, description = "Request options for navigator.credentials.get", body = serde_json::Value),
        (status = 400, description = "No passkey login possible for this address", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_start(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PasskeyLoginStartDto>,
) -> Result<impl IntoResponse, AppError> {
    let (options, pending) = PasskeyService::new(&state.db, &state.webauthn)
        .start_login(payload.email.trim())
        .await?;

    PasskeySession::new(&session)
        .set_authentication(pending)
        .await?;

    Ok((StatusCode::OK, Json(options)))
}

#[utoipa::path(
    post,
    path = "/api/passkey/login/finish",
    tag = PASSKEY_TAG,
    request_body = PasskeyLoginFinishDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "No login in progress or verification failed", body = ErrorDto),
        (status = 401, description = "Passkey not recognised", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_finish(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PasskeyLoginFinishDto>,
) -> Result<impl IntoResponse, AppError> {
    let pending = PasskeySession::new(&session).require_authentication().await?;

    let user = PasskeyService::new(&state.db, &state.webauthn)
        .finish_login(&pending, payload.credential)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
