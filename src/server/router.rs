//! API routes and their OpenAPI document.
//!
//! Handlers are registered through `utoipa-axum` so the document served by Swagger UI
//! at `/api/docs` always lists exactly the mounted routes.

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{account, auth, catalog, oauth, passkey, search, user},
    service::avatar::MAX_AVATAR_BYTES,
    state::AppState,
};

/// Request body limit; leaves room for multipart framing around a maximum size avatar.
const BODY_LIMIT: usize = MAX_AVATAR_BYTES + 256 * 1024;

#[derive(OpenApi)]
#[openapi(info(
    title = "Catalog API",
    description = "Accounts, passkeys and catalog search for the web front end"
))]
struct ApiDoc;

pub fn router(state: AppState) -> Router {
    let avatar_dir = state.avatar_dir.clone();
    let cors = cors_layer(&state.app_url);

    let (api, openapi) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        // Password login and session
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        // OAuth
        .routes(routes!(oauth::login))
        .routes(routes!(oauth::callback))
        // Token based account flows
        .routes(routes!(account::register))
        .routes(routes!(account::confirm_email))
        .routes(routes!(account::resend_confirmation))
        .routes(routes!(account::forgot_password))
        .routes(routes!(account::reset_password))
        // Profile and avatar
        .routes(routes!(user::get_profile, user::update_profile))
        .routes(routes!(user::change_password))
        .routes(routes!(user::upload_avatar, user::delete_avatar))
        // Passkeys
        .routes(routes!(passkey::get_passkeys))
        .routes(routes!(passkey::rename_passkey, passkey::delete_passkey))
        .routes(routes!(passkey::register_start))
        .routes(routes!(passkey::register_finish))
        .routes(routes!(passkey::login_start))
        .routes(routes!(passkey::login_finish))
        // Search and catalog documents
        .routes(routes!(search::search))
        .routes(routes!(search::passthrough))
        .routes(routes!(catalog::get_dataset_features))
        .routes(routes!(catalog::get_dataset_qualities))
        .routes(routes!(catalog::get_dataset_statistics))
        .routes(routes!(catalog::get_user_summary))
        .routes(routes!(catalog::get_document))
        .split_for_parts();

    api.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi))
        .nest_service("/avatars", ServeDir::new(avatar_dir))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(cors)
        .with_state(state)
}

/// Allows credentialed requests from the application origin only.
fn cors_layer(app_url: &str) -> CorsLayer {
    let Ok(origin) = app_url.parse::<HeaderValue>() else {
        return CorsLayer::new();
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
}
