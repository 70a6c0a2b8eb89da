//! Type-safe session management wrappers.
//!
//! This module provides type-safe interfaces for managing different aspects of user sessions,
//! organized by concern. Each struct handles a specific domain of session data, preventing
//! typos, ensuring type consistency, and centralizing session-related logic.
//!
//! # Architecture
//!
//! Session management is split into focused concerns:
//! - `AuthSession` - User authentication state (user ID)
//! - `CsrfSession` - CSRF token management for OAuth flows
//! - `OAuthFlowSession` - Provider of the OAuth flow in progress
//! - `PasskeySession` - WebAuthn ceremony state between start and finish
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use webauthn_rs::prelude::{PasskeyAuthentication, PasskeyRegistration};

use crate::server::{
    error::{auth::AuthError, AppError},
    util::parse::parse_i32_from_string,
};

// Session key constants
const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";
const SESSION_OAUTH_PROVIDER: &str = "auth:oauth_provider";
const SESSION_OAUTH_PKCE_VERIFIER: &str = "auth:oauth_pkce_verifier";
const SESSION_PASSKEY_REGISTRATION: &str = "passkey:registration";
const SESSION_PASSKEY_AUTHENTICATION: &str = "passkey:authentication";

/// Authentication session management.
///
/// Handles user authentication state including storing and retrieving the
/// authenticated user's account ID and session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Gets the underlying Session reference for use with extractors.
    pub fn inner(&self) -> &Session {
        self.session
    }

    /// Logs the user in.
    ///
    /// The session id is rotated first so an id issued before login cannot be reused.
    ///
    /// # Arguments
    /// - `user_id` - The account id
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_USER_ID, user_id.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the logged-in account id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    /// - `Err(AppError::InternalErr(_))` - Stored id is not numeric
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let Some(user_id_str) = self.session.get::<String>(SESSION_AUTH_USER_ID).await? else {
            return Ok(None);
        };

        let user_id = parse_i32_from_string(user_id_str)?;

        Ok(Some(user_id))
    }

    /// Checks if a user is currently logged in.
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_user_id().await?.is_some())
    }

    /// Clears all data from the session.
    ///
    /// Used during logout to remove all session data including authentication
    /// state and any pending OAuth or passkey ceremony.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection session management.
///
/// Handles CSRF token storage and validation for OAuth flows. Tokens are stored
/// during login initiation and validated during the OAuth callback.
pub struct CsrfSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session.
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// The token is removed so each one can only be used once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}

/// OAuth flow state session management.
///
/// Remembers which provider a login was started with so that a callback for
/// another provider is rejected, and the PKCE verifier the token exchange needs.
pub struct OAuthFlowSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> OAuthFlowSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_provider(&self, provider: &str) -> Result<(), AppError> {
        self.session
            .insert(SESSION_OAUTH_PROVIDER, provider.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves and removes the provider of the pending flow.
    pub async fn take_provider(&self) -> Result<Option<String>, AppError> {
        let provider = self.session.remove(SESSION_OAUTH_PROVIDER).await?;
        Ok(provider)
    }

    pub async fn set_pkce_verifier(&self, verifier: String) -> Result<(), AppError> {
        self.session
            .insert(SESSION_OAUTH_PKCE_VERIFIER, verifier)
            .await?;
        Ok(())
    }

    pub async fn take_pkce_verifier(&self) -> Result<Option<String>, AppError> {
        let verifier = self.session.remove(SESSION_OAUTH_PKCE_VERIFIER).await?;
        Ok(verifier)
    }
}

/// Passkey login ceremony bound to the account it was started for.
#[derive(Serialize, Deserialize)]
pub struct PendingPasskeyLogin {
    pub user_id: i32,
    pub state: PasskeyAuthentication,
}

/// WebAuthn ceremony state.
///
/// The state produced when a registration or login starts is kept server side until
/// the browser posts its response. Taking the state removes it, so every challenge
/// can be answered once.
pub struct PasskeySession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> PasskeySession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_registration(&self, state: PasskeyRegistration) -> Result<(), AppError> {
        self.session
            .insert(SESSION_PASSKEY_REGISTRATION, state)
            .await?;
        Ok(())
    }

    pub async fn take_registration(&self) -> Result<Option<PasskeyRegistration>, AppError> {
        let state = self.session.remove(SESSION_PASSKEY_REGISTRATION).await?;
        Ok(state)
    }

    /// Takes the pending registration, failing when none was started in this session.
    ///
    /// # Returns
    /// - `Ok(PasskeyRegistration)` - State stored by the registration start
    /// - `Err(AppError::AuthErr(AuthError::PasskeyStateMissing))` - Nothing pending
    pub async fn require_registration(&self) -> Result<PasskeyRegistration, AppError> {
        self.take_registration()
            .await?
            .ok_or_else(|| AuthError::PasskeyStateMissing.into())
    }

    pub async fn set_authentication(&self, pending: PendingPasskeyLogin) -> Result<(), AppError> {
        self.session
            .insert(SESSION_PASSKEY_AUTHENTICATION, pending)
            .await?;
        Ok(())
    }

    pub async fn take_authentication(&self) -> Result<Option<PendingPasskeyLogin>, AppError> {
        let pending = self.session.remove(SESSION_PASSKEY_AUTHENTICATION).await?;
        Ok(pending)
    }

    /// Takes the pending login, failing when none was started in this session.
    pub async fn require_authentication(&self) -> Result<PendingPasskeyLogin, AppError> {
        self.take_authentication()
            .await?
            .ok_or_else(|| AuthError::PasskeyStateMissing.into())
    }
}
