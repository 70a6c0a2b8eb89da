use crate::server::error::{config::ConfigError, AppError};

const GITHUB_AUTH_URL: &str = "https://github.com/login/oauth/authorize";
const GITHUB_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

const DEFAULT_AVATAR_DIR: &str = "./avatars";
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 5;
const DEFAULT_WEBAUTHN_RP_NAME: &str = "Catalog";

/// Client credentials and endpoints of one OAuth provider.
#[derive(Debug, Clone)]
pub struct OAuthProviderConfig {
    pub client_id: String,
    pub client_secret: String,
    pub auth_url: String,
    pub token_url: String,
}

pub struct Config {
    pub database_url: String,
    pub app_url: String,

    /// Base URL of the external REST API, without trailing slash.
    pub api_url: String,

    pub elasticsearch_url: String,
    pub elasticsearch_username: Option<String>,
    pub elasticsearch_password: Option<String>,

    pub github: Option<OAuthProviderConfig>,
    pub google: Option<OAuthProviderConfig>,

    pub webauthn_rp_id: String,
    pub webauthn_rp_name: String,

    pub email_api_url: Option<String>,
    pub email_api_key: Option<String>,
    pub email_from: String,

    pub avatar_dir: String,
    pub request_timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let app_url = required("APP_URL")?.trim_end_matches('/').to_string();

        let webauthn_rp_id = match optional("WEBAUTHN_RP_ID") {
            Some(rp_id) => rp_id,
            None => url::Url::parse(&app_url)
                .ok()
                .and_then(|url| url.host_str().map(str::to_string))
                .ok_or_else(|| ConfigError::InvalidValue {
                    name: "APP_URL".to_string(),
                    reason: "URL has no host to use as WebAuthn relying party id".to_string(),
                })?,
        };

        let request_timeout_seconds = match optional("REQUEST_TIMEOUT_SECONDS") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "REQUEST_TIMEOUT_SECONDS".to_string(),
                reason: format!("'{}' is not a whole number of seconds", value),
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECONDS,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            api_url: required("API_URL")?.trim_end_matches('/').to_string(),
            elasticsearch_url: required("ELASTICSEARCH_URL")?
                .trim_end_matches('/')
                .to_string(),
            elasticsearch_username: optional("ELASTICSEARCH_USERNAME"),
            elasticsearch_password: optional("ELASTICSEARCH_PASSWORD"),
            github: oauth_provider("GITHUB", GITHUB_AUTH_URL, GITHUB_TOKEN_URL),
            google: oauth_provider("GOOGLE", GOOGLE_AUTH_URL, GOOGLE_TOKEN_URL),
            webauthn_rp_id,
            webauthn_rp_name: optional("WEBAUTHN_RP_NAME")
                .unwrap_or_else(|| DEFAULT_WEBAUTHN_RP_NAME.to_string()),
            email_api_url: optional("EMAIL_API_URL"),
            email_api_key: optional("EMAIL_API_KEY"),
            email_from: optional("EMAIL_FROM")
                .unwrap_or_else(|| format!("no-reply@{}", app_url_host(&app_url))),
            avatar_dir: optional("AVATAR_DIR").unwrap_or_else(|| DEFAULT_AVATAR_DIR.to_string()),
            request_timeout_seconds,
            app_url,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// A provider is enabled only when both its client id and secret are set.
fn oauth_provider(prefix: &str, auth_url: &str, token_url: &str) -> Option<OAuthProviderConfig> {
    let client_id = optional(&format!("{}_CLIENT_ID", prefix))?;
    let client_secret = optional(&format!("{}_CLIENT_SECRET", prefix))?;

    Some(OAuthProviderConfig {
        client_id,
        client_secret,
        auth_url: auth_url.to_string(),
        token_url: token_url.to_string(),
    })
}

fn app_url_host(app_url: &str) -> String {
    url::Url::parse(app_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| "localhost".to_string())
}
