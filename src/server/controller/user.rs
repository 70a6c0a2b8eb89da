use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use utoipa::ToSchema;

use crate::{
    model::{
        api::ErrorDto,
        user::{ChangePasswordDto, ProfileDto, UpdateProfileDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::UpdateProfileParam,
        service::{avatar::AvatarService, user::UserService},
        state::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// Multipart form accepted by the avatar upload.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct AvatarForm {
    /// PNG, JPEG, GIF or WebP image of at most 2 MB.
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    avatar: String,
}

#[utoipa::path(
    get,
    path = "/api/user/profile",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Profile of the logged-in user", body = ProfileDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_profile_dto())))
}

#[utoipa::path(
    put,
    path = "/api/user/profile",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = ProfileDto),
        (status = 400, description = "Empty username", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db)
        .update_profile(UpdateProfileParam::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_profile_dto())))
}

#[utoipa::path(
    put,
    path = "/api/user/password",
    tag = USER_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "OAuth account or new password too short", body = ErrorDto),
        (status = 401, description = "Not logged in or current password wrong", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    UserService::new(&state.db)
        .change_password(&user, &payload.current_password, &payload.new_password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/user/avatar",
    tag = USER_TAG,
    request_body(content = AvatarForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Avatar stored", body = ProfileDto),
        (status = 400, description = "Missing field, unsupported type or too large", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_avatar(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let invalid_form = |e: axum::extract::multipart::MultipartError| {
        AppError::BadRequest(format!("Invalid upload: {}", e.body_text()))
    };

    while let Some(field) = multipart.next_field().await.map_err(invalid_form)? {
        if field.name() != Some("avatar") {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(invalid_form)?;

        let user = AvatarService::new(&state.db, &state.avatar_dir)
            .upload(user, &content_type, &bytes)
            .await?;

        return Ok((StatusCode::OK, Json(user.into_profile_dto())));
    }

    Err(AppError::BadRequest(
        "Upload must contain an 'avatar' file".to_string(),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/user/avatar",
    tag = USER_TAG,
    responses(
        (status = 204, description = "Avatar removed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_avatar(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    AvatarService::new(&state.db, &state.avatar_dir)
        .remove(&user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
