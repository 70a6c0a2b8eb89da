//! Account details fetched from the provider after the token exchange.

use serde::Deserialize;

use crate::server::{
    error::{auth::AuthError, AppError},
    service::oauth::{OAuthProvider, OAuthService},
};

const GITHUB_USER_URL: &str = "https://api.github.com/user";
const GITHUB_EMAILS_URL: &str = "https://api.github.com/user/emails";
const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// Provider account reduced to what the `users` table needs.
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthProfile {
    /// Verified email address, `None` when the provider has none.
    pub email: Option<String>,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GithubUser {
    login: String,
    email: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GithubEmail {
    email: String,
    primary: bool,
    verified: bool,
}

#[derive(Debug, Deserialize)]
struct GoogleUser {
    email: Option<String>,
    #[serde(default)]
    email_verified: bool,
    name: Option<String>,
    given_name: Option<String>,
    family_name: Option<String>,
}

impl<'a> OAuthService<'a> {
    pub(super) async fn fetch_profile(&self, access_token: &str) -> Result<OAuthProfile, AppError> {
        match self.provider {
            OAuthProvider::Github => self.fetch_github_profile(access_token).await,
            OAuthProvider::Google => self.fetch_google_profile(access_token).await,
        }
    }

    /// GitHub only lists a public email on `/user`; otherwise the primary verified
    /// address from `/user/emails` is used.
    async fn fetch_github_profile(&self, access_token: &str) -> Result<OAuthProfile, AppError> {
        let user: GithubUser = self.get_json(GITHUB_USER_URL, access_token).await?;

        let email = match user.email.filter(|email| !email.is_empty()) {
            Some(email) => Some(email),
            None => {
                let emails: Vec<GithubEmail> =
                    self.get_json(GITHUB_EMAILS_URL, access_token).await?;
                emails
                    .into_iter()
                    .find(|e| e.primary && e.verified)
                    .map(|e| e.email)
            }
        };

        let (first_name, last_name) = split_name(user.name.as_deref());

        Ok(OAuthProfile {
            email,
            username: user.login,
            first_name,
            last_name,
        })
    }

    async fn fetch_google_profile(&self, access_token: &str) -> Result<OAuthProfile, AppError> {
        let user: GoogleUser = self.get_json(GOOGLE_USERINFO_URL, access_token).await?;

        let email = user.email.filter(|_| user.email_verified);
        let username = user
            .name
            .clone()
            .or_else(|| email.as_deref().map(email_local_part))
            .unwrap_or_default();

        let (first_name, last_name) = match (user.given_name, user.family_name) {
            (None, None) => split_name(user.name.as_deref()),
            names => names,
        };

        Ok(OAuthProfile {
            email,
            username,
            first_name,
            last_name,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        access_token: &str,
    ) -> Result<T, AppError> {
        let exchange_failed = |e: reqwest::Error| AuthError::TokenExchange(e.to_string());

        let value = self
            .http_client
            .get(url)
            .bearer_auth(access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(exchange_failed)?
            .error_for_status()
            .map_err(exchange_failed)?
            .json::<T>()
            .await
            .map_err(exchange_failed)?;

        Ok(value)
    }
}

/// Splits a display name at its first space.
fn split_name(name: Option<&str>) -> (Option<String>, Option<String>) {
    let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
        return (None, None);
    };

    match name.split_once(' ') {
        Some((first, last)) => (Some(first.to_string()), Some(last.trim().to_string())),
        None => (Some(name.to_string()), None),
    }
}

pub(super) fn email_local_part(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_display_names() {
        assert_eq!(
            split_name(Some("Ada King Lovelace")),
            (Some("Ada".to_string()), Some("King Lovelace".to_string()))
        );
        assert_eq!(split_name(Some("Ada")), (Some("Ada".to_string()), None));
        assert_eq!(split_name(Some("  ")), (None, None));
        assert_eq!(split_name(None), (None, None));
    }

    #[test]
    fn email_local_part_falls_back_to_input() {
        assert_eq!(email_local_part("ada@example.org"), "ada");
        assert_eq!(email_local_part("ada"), "ada");
    }

    #[test]
    fn github_emails_deserialize() {
        let emails: Vec<GithubEmail> = serde_json::from_str(
            r#"[{"email":"a@x.org","primary":false,"verified":true,"visibility":null},
                {"email":"b@x.org","primary":true,"verified":true,"visibility":"private"}]"#,
        )
        .unwrap();

        let primary = emails.into_iter().find(|e| e.primary && e.verified).unwrap();
        assert_eq!(primary.email, "b@x.org");
    }
}
