use crate::server::{
    data::user::UserRepository,
    error::AppError,
    service::oauth::{profile::OAuthProfile, OAuthProvider, OAuthService},
    state::OAuth2Client,
};
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_or_create_user;

fn oauth_client() -> OAuth2Client {
    BasicClient::new(ClientId::new("client".to_string()))
        .set_client_secret(ClientSecret::new("secret".to_string()))
        .set_auth_uri(AuthUrl::new("https://accounts.google.com/o/oauth2/v2/auth".to_string()).unwrap())
        .set_token_uri(TokenUrl::new("https://oauth2.googleapis.com/token".to_string()).unwrap())
        .set_redirect_uri(
            RedirectUrl::new("http://localhost:8080/api/auth/oauth/google/callback".to_string())
                .unwrap(),
        )
}

fn profile(email: Option<&str>) -> OAuthProfile {
    OAuthProfile {
        email: email.map(str::to_string),
        username: "Ada Lovelace".to_string(),
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
    }
}
