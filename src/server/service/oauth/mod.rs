//! OAuth2 login with GitHub and Google.
//!
//! The authorization code flow uses PKCE. The CSRF state, provider and PKCE verifier
//! are kept in the session between the redirect to the provider and the callback.
//! Accounts are matched on the verified email address the provider returns.

use sea_orm::DatabaseConnection;

use crate::server::state::OAuth2Client;

pub mod callback;
pub mod login;
pub mod profile;

/// Supported login providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Github,
    Google,
}

impl OAuthProvider {
    pub const ALL: [OAuthProvider; 2] = [OAuthProvider::Github, OAuthProvider::Google];

    /// Path segment and `external_source` value of the provider.
    pub fn slug(&self) -> &'static str {
        match self {
            OAuthProvider::Github => "github",
            OAuthProvider::Google => "google",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|provider| provider.slug() == slug)
    }

    pub fn label(&self) -> &'static str {
        match self {
            OAuthProvider::Github => "GitHub",
            OAuthProvider::Google => "Google",
        }
    }

    fn scopes(&self) -> &'static [&'static str] {
        match self {
            OAuthProvider::Github => &["user:email", "read:user"],
            OAuthProvider::Google => &["openid", "email", "profile"],
        }
    }
}

pub struct OAuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    pub provider: OAuthProvider,
}

impl<'a> OAuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        provider: OAuthProvider,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            provider,
        }
    }
}
