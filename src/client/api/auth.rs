use crate::{
    client::{
        api::helper::{get, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{auth::LoginDto, user::UserDto},
};

/// Returns the logged-in user, `None` without a session.
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    let response = send_request(get("/api/auth/user")).await?;
    parse_response(response).await
}

pub async fn login(email: String, password: String) -> Result<UserDto, ApiError> {
    let body = serialize_json(&LoginDto { email, password })?;

    let response = send_request(post("/api/auth/login").body(body)).await?;
    parse_response(response).await
}
