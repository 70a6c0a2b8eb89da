use oauth2::{CsrfToken, PkceCodeChallenge, PkceCodeVerifier, Scope};
use url::Url;

use crate::server::service::oauth::OAuthService;

impl<'a> OAuthService<'a> {
    /// Builds the provider authorization URL.
    ///
    /// # Returns
    /// - The URL to redirect to
    /// - The CSRF token to store in the session
    /// - The PKCE verifier to store in the session
    pub fn login_url(&self) -> (Url, CsrfToken, PkceCodeVerifier) {
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scopes(
                self.provider
                    .scopes()
                    .iter()
                    .map(|scope| Scope::new(scope.to_string())),
            )
            .set_pkce_challenge(pkce_challenge)
            .url();

        (authorize_url, csrf_state, pkce_verifier)
    }
}
