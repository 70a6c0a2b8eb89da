use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The session refers to a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User ID {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Unknown email/username or wrong password.
    ///
    /// The same message is returned for both cases so accounts cannot be enumerated.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Password login attempted on an account still awaiting email confirmation.
    #[error("Account {0} has not been activated")]
    AccountNotActivated(i32),

    /// User lacks access to the requested operation.
    ///
    /// # Fields
    /// - User ID
    /// - Reason logged server-side
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// The requested OAuth provider has no client credentials configured.
    #[error("OAuth provider '{0}' is not configured")]
    OAuthProviderNotConfigured(String),

    /// Exchanging the authorization code or fetching the provider profile failed.
    #[error("OAuth token exchange failed: {0}")]
    TokenExchange(String),

    /// Passkey ceremony finished without a matching start in this session.
    #[error("No passkey ceremony in progress for this session")]
    PasskeyStateMissing,

    /// The browser response did not verify against the stored ceremony state.
    #[error("Passkey verification failed: {0}")]
    PasskeyVerificationFailed(String),

    /// Assertion for a credential id that is not registered.
    #[error("Passkey credential is not registered")]
    PasskeyNotRecognised,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` / `InvalidCredentials` /
///   `PasskeyNotRecognised` → 401 Unauthorized
/// - `AccountNotActivated` / `AccessDenied` → 403 Forbidden
/// - `CsrfValidationFailed` / `TokenExchange` / `PasskeyStateMissing` /
///   `PasskeyVerificationFailed` → 400 Bad Request
/// - `OAuthProviderNotConfigured` → 404 Not Found
///
/// Details are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not logged in")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::PasskeyNotRecognised => {
                (StatusCode::UNAUTHORIZED, "Passkey is not recognised")
            }
            Self::AccountNotActivated(_) => (
                StatusCode::FORBIDDEN,
                "Please confirm your email address before logging in",
            ),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
            Self::CsrfValidationFailed | Self::TokenExchange(_) => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::PasskeyStateMissing | Self::PasskeyVerificationFailed(_) => (
                StatusCode::BAD_REQUEST,
                "Passkey verification failed, please try again.",
            ),
            Self::OAuthProviderNotConfigured(_) => {
                (StatusCode::NOT_FOUND, "Login provider not available")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
