//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for the legacy account tables
//! - HTTP client for OAuth profile lookups
//! - OAuth2 clients for the enabled login providers
//! - WebAuthn relying party for passkeys
//! - Search cluster and REST API clients
//! - Email delivery and avatar storage settings

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::{path::PathBuf, sync::Arc};
use webauthn_rs::Webauthn;

use crate::server::{
    rest::RestClient,
    search::client::SearchClient,
    service::{email::EmailService, oauth::OAuthProvider},
};

/// Type alias for the OAuth2 client of a login provider.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: connection pools and HTTP clients share their
/// internals, the WebAuthn instance is behind an `Arc` and the search client shares
/// its connector cache between clones.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for the legacy account tables.
    pub db: DatabaseConnection,

    /// HTTP client for external requests.
    ///
    /// Configured without redirects and with the request timeout.
    pub http_client: reqwest::Client,

    /// GitHub login, `None` when no client credentials are configured.
    pub github_oauth: Option<OAuth2Client>,

    /// Google login, `None` when no client credentials are configured.
    pub google_oauth: Option<OAuth2Client>,

    /// WebAuthn relying party used for passkey ceremonies.
    pub webauthn: Arc<Webauthn>,

    /// Elasticsearch access with cached index connectors.
    pub search: SearchClient,

    /// External REST API access.
    pub rest: RestClient,

    /// Outgoing account emails.
    pub email: EmailService,

    /// Application base URL for generating links in emails and redirects.
    pub app_url: String,

    /// Directory avatar uploads are written to, served under `/avatars`.
    pub avatar_dir: PathBuf,
}

impl AppState {
    /// Returns the OAuth client of a provider if it is enabled.
    pub fn oauth_client(&self, provider: OAuthProvider) -> Option<&OAuth2Client> {
        match provider {
            OAuthProvider::Github => self.github_oauth.as_ref(),
            OAuthProvider::Google => self.google_oauth.as_ref(),
        }
    }
}
