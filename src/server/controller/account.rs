use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{EmailDto, RegisterDto, ResetPasswordDto, TokenDto},
    },
    server::{
        error::AppError, model::user::RegisterParam, service::account::AccountService,
        state::AppState,
    },
};

pub static ACCOUNT_TAG: &str = "account";

/// Shown for resend and forgot requests whether or not the address is registered.
const CHECK_YOUR_EMAIL: &str =
    "If an account exists for this address, an email with further instructions is on its way";

fn account_service(state: &AppState) -> AccountService<'_> {
    AccountService::new(&state.db, &state.email, &state.app_url)
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = ACCOUNT_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created, confirmation email sent", body = MessageDto),
        (status = 400, description = "Invalid input or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    account_service(&state)
        .register(RegisterParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new(
            "Your account has been created. Please check your email to confirm your address.",
        )),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/confirm-email",
    tag = ACCOUNT_TAG,
    request_body = TokenDto,
    responses(
        (status = 200, description = "Email confirmed", body = MessageDto),
        (status = 400, description = "Unknown or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_email(
    State(state): State<AppState>,
    Json(payload): Json<TokenDto>,
) -> Result<impl IntoResponse, AppError> {
    account_service(&state).confirm_email(&payload.token).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(
            "Your email address has been confirmed. You can now log in.",
        )),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/resend-confirmation",
    tag = ACCOUNT_TAG,
    request_body = EmailDto,
    responses(
        (status = 200, description = "Request accepted", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resend_confirmation(
    State(state): State<AppState>,
    Json(payload): Json<EmailDto>,
) -> Result<impl IntoResponse, AppError> {
    account_service(&state)
        .resend_confirmation(&payload.email)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new(CHECK_YOUR_EMAIL))))
}

#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    tag = ACCOUNT_TAG,
    request_body = EmailDto,
    responses(
        (status = 200, description = "Request accepted", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<EmailDto>,
) -> Result<impl IntoResponse, AppError> {
    account_service(&state)
        .forgot_password(&payload.email)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new(CHECK_YOUR_EMAIL))))
}

#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = ACCOUNT_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 400, description = "Unknown, used or expired token, or weak password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    account_service(&state)
        .reset_password(&payload.token, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(
            "Your password has been changed. You can now log in.",
        )),
    ))
}
