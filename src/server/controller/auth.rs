use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, auth::LoginDto, user::UserDto},
    server::{
        data::user::UserRepository, error::AppError, middleware::session::AuthSession,
        service::auth::AuthService, state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Logs in with email or username and password.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 403, description = "Email address not confirmed yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(payload.email.trim(), &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Clears the session and returns to the home page.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Session cleared, redirect to /")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(Redirect::temporary("/"))
}

/// Returns the logged-in user, or `null` for anonymous sessions.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user or null", body = Option<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(user_id) = AuthSession::new(&session).get_user_id().await? else {
        return Ok((StatusCode::OK, Json(None::<UserDto>)));
    };

    let user = UserRepository::new(&state.db).find_by_id(user_id).await?;

    Ok((StatusCode::OK, Json(user.map(|u| u.into_dto()))))
}
