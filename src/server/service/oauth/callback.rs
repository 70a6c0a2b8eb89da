use chrono::Utc;
use dioxus_logger::tracing;
use oauth2::{AuthorizationCode, PkceCodeVerifier, TokenResponse};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, User},
    service::oauth::{
        profile::{email_local_part, OAuthProfile},
        OAuthService,
    },
    util::{
        password::hash_password,
        token::{generate_random_code, TOKEN_LENGTH},
        validate::MAX_USERNAME_LENGTH,
    },
};

impl<'a> OAuthService<'a> {
    /// Completes the authorization code flow and returns the account to log in.
    ///
    /// # Arguments
    /// - `authorization_code` - Code from the callback query
    /// - `pkce_verifier` - Verifier stored in the session when the login started
    ///
    /// # Returns
    /// - `Ok(User)` - Existing or newly created account
    /// - `Err(AppError::AuthErr(AuthError::TokenExchange(_)))` - Provider rejected the code
    ///   or the profile could not be fetched
    /// - `Err(AppError::BadRequest(_))` - Provider account has no verified email
    pub async fn callback(
        &self,
        authorization_code: String,
        pkce_verifier: String,
    ) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .set_pkce_verifier(PkceCodeVerifier::new(pkce_verifier))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let profile = self.fetch_profile(token.access_token().secret()).await?;

        self.find_or_create_user(profile).await
    }

    /// Matches the provider profile to an account by email, creating one when needed.
    ///
    /// The provider has verified the address, so an existing account that never
    /// confirmed its email is activated. New accounts get an unusable random password.
    pub async fn find_or_create_user(&self, profile: OAuthProfile) -> Result<User, AppError> {
        let Some(email) = profile.email else {
            return Err(AppError::BadRequest(format!(
                "Your {} account has no verified email address",
                self.provider.label()
            )));
        };

        let user_repo = UserRepository::new(self.db);
        let now = Utc::now();

        if let Some(user) = user_repo.find_by_email(&email).await? {
            if !user.active {
                user_repo.activate(user.id).await?;
            }
            user_repo.update_last_login(user.id, now).await?;

            tracing::debug!(
                "User {} logged in with {}",
                user.id,
                self.provider.slug()
            );

            return Ok(User {
                active: true,
                activation_code: None,
                last_login: Some(now),
                ..user
            });
        }

        let mut username: String = profile.username.trim().to_string();
        if username.is_empty() {
            username = email_local_part(&email);
        }
        let username = username.chars().take(MAX_USERNAME_LENGTH).collect();

        let user = user_repo
            .create(CreateUserParam {
                username,
                email,
                password_hash: hash_password(&generate_random_code(TOKEN_LENGTH))?,
                active: true,
                activation_code: None,
                first_name: profile.first_name,
                last_name: profile.last_name,
                external_source: Some(self.provider.slug().to_string()),
            })
            .await?;
        user_repo.update_last_login(user.id, now).await?;

        tracing::info!(
            "Created user {} from {} login",
            user.id,
            self.provider.slug()
        );

        Ok(User {
            last_login: Some(now),
            ..user
        })
    }
}
