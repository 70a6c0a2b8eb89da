use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::{AuthSession, CsrfSession, OAuthFlowSession},
    service::oauth::{OAuthProvider, OAuthService},
    state::{AppState, OAuth2Client},
};

pub static OAUTH_TAG: &str = "oauth";

/// Query parameters of the provider redirect back to the callback.
#[derive(Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    /// CSRF state token to be validated against the session value.
    pub state: Option<String>,
    /// Set by the provider when the user declined or the request was invalid.
    pub error: Option<String>,
}

/// Redirects to the provider's consent page.
#[utoipa::path(
    get,
    path = "/api/auth/oauth/{provider}/login",
    tag = OAUTH_TAG,
    params(
        ("provider" = String, Path, description = "github or google")
    ),
    responses(
        (status = 307, description = "Redirect to the provider"),
        (status = 404, description = "Provider unknown or not configured", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Path(provider): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (provider, oauth_client) = resolve_provider(&state, &provider)?;
    let service = OAuthService::new(&state.db, &state.http_client, oauth_client, provider);

    let (url, csrf_token, pkce_verifier) = service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;
    let flow = OAuthFlowSession::new(&session);
    flow.set_provider(provider.slug()).await?;
    flow.set_pkce_verifier(pkce_verifier.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Completes the provider login and continues to the dashboard.
#[utoipa::path(
    get,
    path = "/api/auth/oauth/{provider}/callback",
    tag = OAUTH_TAG,
    params(
        ("provider" = String, Path, description = "github or google"),
        ("code" = Option<String>, Query, description = "Authorization code"),
        ("state" = Option<String>, Query, description = "CSRF state"),
        ("error" = Option<String>, Query, description = "Provider error")
    ),
    responses(
        (status = 307, description = "Logged in, redirect to /dashboard"),
        (status = 400, description = "CSRF mismatch, failed exchange or no verified email", body = crate::model::api::ErrorDto),
        (status = 404, description = "Provider unknown or not configured", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Path(provider): Path<String>,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let (provider, oauth_client) = resolve_provider(&state, &provider)?;

    let stored_state = CsrfSession::new(&session).take_token().await?;
    let flow = OAuthFlowSession::new(&session);
    let stored_provider = flow.take_provider().await?;
    let pkce_verifier = flow.take_pkce_verifier().await?;

    if let Some(error) = params.error {
        tracing::debug!("{} login cancelled: {}", provider.slug(), error);
        return Ok(Redirect::temporary("/login"));
    }

    let (Some(code), Some(csrf_state)) = (params.code, params.state) else {
        return Err(AuthError::CsrfValidationFailed.into());
    };

    if stored_state.as_deref() != Some(csrf_state.as_str())
        || stored_provider.as_deref() != Some(provider.slug())
    {
        return Err(AuthError::CsrfValidationFailed.into());
    }

    let Some(pkce_verifier) = pkce_verifier else {
        return Err(AuthError::CsrfValidationFailed.into());
    };

    let user = OAuthService::new(&state.db, &state.http_client, oauth_client, provider)
        .callback(code, pkce_verifier)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(Redirect::temporary("/dashboard"))
}

fn resolve_provider<'s>(
    state: &'s AppState,
    slug: &str,
) -> Result<(OAuthProvider, &'s OAuth2Client), AppError> {
    let provider = OAuthProvider::from_slug(slug)
        .ok_or_else(|| AuthError::OAuthProviderNotConfigured(slug.to_string()))?;

    let client = state
        .oauth_client(provider)
        .ok_or_else(|| AuthError::OAuthProviderNotConfigured(slug.to_string()))?;

    Ok((provider, client))
}
