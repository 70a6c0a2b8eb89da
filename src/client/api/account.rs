use crate::{
    client::{
        api::helper::{parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        api::MessageDto,
        auth::{EmailDto, RegisterDto, ResetPasswordDto, TokenDto},
    },
};

pub async fn register(payload: RegisterDto) -> Result<MessageDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/auth/register").body(body)).await?;
    parse_response(response).await
}

pub async fn confirm_email(token: String) -> Result<MessageDto, ApiError> {
    let body = serialize_json(&TokenDto { token })?;

    let response = send_request(post("/api/auth/confirm-email").body(body)).await?;
    parse_response(response).await
}

pub async fn resend_confirmation(email: String) -> Result<MessageDto, ApiError> {
    let body = serialize_json(&EmailDto { email })?;

    let response = send_request(post("/api/auth/resend-confirmation").body(body)).await?;
    parse_response(response).await
}

pub async fn forgot_password(email: String) -> Result<MessageDto, ApiError> {
    let body = serialize_json(&EmailDto { email })?;

    let response = send_request(post("/api/auth/forgot-password").body(body)).await?;
    parse_response(response).await
}

pub async fn reset_password(token: String, password: String) -> Result<MessageDto, ApiError> {
    let body = serialize_json(&ResetPasswordDto { token, password })?;

    let response = send_request(post("/api/auth/reset-password").body(body)).await?;
    parse_response(response).await
}
