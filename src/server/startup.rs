use dioxus_logger::tracing;
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use std::{sync::Arc, time::Duration};
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::MySqlStore;
use webauthn_rs::{Webauthn, WebauthnBuilder};

use crate::server::{
    config::{Config, OAuthProviderConfig},
    error::{config::ConfigError, AppError},
    rest::RestClient,
    search::client::{SearchClient, SearchCredentials},
    service::{email::EmailService, oauth::OAuthProvider},
    state::{AppState, OAuth2Client},
};

/// Connects to the legacy MySQL database and runs pending migrations.
///
/// Migrations only create the account tables that do not exist yet, so an existing
/// legacy schema is left untouched.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by a session table in the same database.
///
/// Sessions expire after 7 days of inactivity.
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<MySqlStore>, AppError> {
    let pool = db.get_mysql_connection_pool();
    let session_store = MySqlStore::new(pool.clone());

    session_store.migrate().await?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7)));

    Ok(session)
}

/// Builds the shared HTTP client.
///
/// Redirects are disabled so outbound calls cannot be bounced to other hosts, and every
/// request is bounded by the configured timeout.
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(config.request_timeout_seconds))
        .connect_timeout(Duration::from_secs(config.request_timeout_seconds))
        .user_agent(concat!("catalog/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Builds the OAuth client of a provider when its credentials are configured.
///
/// The redirect URL is `{APP_URL}/api/auth/oauth/{provider}/callback`.
pub fn setup_oauth_client(
    config: &Config,
    provider: OAuthProvider,
) -> Result<Option<OAuth2Client>, AppError> {
    let provider_config: Option<&OAuthProviderConfig> = match provider {
        OAuthProvider::Github => config.github.as_ref(),
        OAuthProvider::Google => config.google.as_ref(),
    };

    let Some(provider_config) = provider_config else {
        tracing::info!("{} login disabled: no client credentials", provider.slug());
        return Ok(None);
    };

    let invalid = |name: &str, reason: String| ConfigError::InvalidValue {
        name: name.to_string(),
        reason,
    };

    let redirect_url = format!(
        "{}/api/auth/oauth/{}/callback",
        config.app_url,
        provider.slug()
    );

    let client = BasicClient::new(ClientId::new(provider_config.client_id.clone()))
        .set_client_secret(ClientSecret::new(provider_config.client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(provider_config.auth_url.clone())
                .map_err(|e| invalid("auth url", e.to_string()))?,
        )
        .set_token_uri(
            TokenUrl::new(provider_config.token_url.clone())
                .map_err(|e| invalid("token url", e.to_string()))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(redirect_url).map_err(|e| invalid("APP_URL", e.to_string()))?,
        );

    Ok(Some(client))
}

/// Builds the WebAuthn relying party from `WEBAUTHN_RP_ID` and `APP_URL`.
pub fn setup_webauthn(config: &Config) -> Result<Arc<Webauthn>, AppError> {
    let origin = url::Url::parse(&config.app_url).map_err(|e| ConfigError::InvalidValue {
        name: "APP_URL".to_string(),
        reason: e.to_string(),
    })?;

    let webauthn = WebauthnBuilder::new(&config.webauthn_rp_id, &origin)?
        .rp_name(&config.webauthn_rp_name)
        .build()?;

    Ok(Arc::new(webauthn))
}

/// Makes sure the avatar directory exists before it is served.
pub async fn prepare_avatar_dir(config: &Config) -> Result<std::path::PathBuf, AppError> {
    let dir = std::path::PathBuf::from(&config.avatar_dir);
    tokio::fs::create_dir_all(&dir).await?;

    Ok(dir)
}

/// Builds the shared state from the configuration and a connected database.
pub async fn build_state(
    config: &Config,
    db: sea_orm::DatabaseConnection,
) -> Result<AppState, AppError> {
    let http_client = setup_reqwest_client(config)?;

    let credentials = config
        .elasticsearch_username
        .clone()
        .map(|username| SearchCredentials {
            username,
            password: config.elasticsearch_password.clone(),
        });

    Ok(AppState {
        db,
        github_oauth: setup_oauth_client(config, OAuthProvider::Github)?,
        google_oauth: setup_oauth_client(config, OAuthProvider::Google)?,
        webauthn: setup_webauthn(config)?,
        search: SearchClient::new(
            http_client.clone(),
            config.elasticsearch_url.clone(),
            credentials,
        ),
        rest: RestClient::new(http_client.clone(), config.api_url.clone()),
        email: EmailService::new(
            http_client.clone(),
            config.email_api_url.clone(),
            config.email_api_key.clone(),
            config.email_from.clone(),
        ),
        app_url: config.app_url.clone(),
        avatar_dir: prepare_avatar_dir(config).await?,
        http_client,
    })
}
