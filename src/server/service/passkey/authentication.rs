use chrono::Utc;
use dioxus_logger::tracing;
use webauthn_rs::prelude::{PublicKeyCredential, RequestChallengeResponse, WebauthnError};

use crate::server::{
    data::{passkey::PasskeyRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::PendingPasskeyLogin,
    model::{passkey::PasskeyUsageParam, user::User},
    service::passkey::{decode_credential, encode_credential_id, PasskeyService},
};

const PASSKEY_LOGIN_UNAVAILABLE: &str = "No passkey is available for this account";

impl<'a> PasskeyService<'a> {
    /// Starts a passkey login for the account with `email`.
    ///
    /// Unknown accounts and accounts without passkeys get the same response.
    ///
    /// # Returns
    /// - `Ok((options, pending))` - Request options for the browser and the state to keep
    ///   in the session
    /// - `Err(AppError::BadRequest(_))` - No passkey login possible for that address
    pub async fn start_login(
        &self,
        email: &str,
    ) -> Result<(RequestChallengeResponse, PendingPasskeyLogin), AppError> {
        let user_repo = UserRepository::new(self.db);
        let passkey_repo = PasskeyRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Err(AppError::BadRequest(PASSKEY_LOGIN_UNAVAILABLE.to_string()));
        };

        let credentials = passkey_repo
            .get_by_user(user.id)
            .await?
            .iter()
            .map(decode_credential)
            .collect::<Result<Vec<_>, _>>()?;

        if credentials.is_empty() {
            return Err(AppError::BadRequest(PASSKEY_LOGIN_UNAVAILABLE.to_string()));
        }

        let (options, state) = self.webauthn.start_passkey_authentication(&credentials)?;

        Ok((
            options,
            PendingPasskeyLogin {
                user_id: user.id,
                state,
            },
        ))
    }

    /// Verifies an assertion and records the credential's new state.
    ///
    /// Usage is only recorded once the account is known to be allowed to log in.
    ///
    /// # Returns
    /// - `Ok(User)` - The account to log in
    /// - `Err(AppError::AuthErr(AuthError::PasskeyVerificationFailed(_)))` - Invalid assertion
    /// - `Err(AppError::AuthErr(AuthError::PasskeyNotRecognised))` - Credential not offered
    ///   for or not stored with the account
    /// - `Err(AppError::AuthErr(AuthError::AccountNotActivated(_)))` - Account inactive
    pub async fn finish_login(
        &self,
        pending: &PendingPasskeyLogin,
        credential: serde_json::Value,
    ) -> Result<User, AppError> {
        let credential: PublicKeyCredential = serde_json::from_value(credential)
            .map_err(|e| AuthError::PasskeyVerificationFailed(e.to_string()))?;

        let result = self
            .webauthn
            .finish_passkey_authentication(&credential, &pending.state)
            .map_err(|e| match e {
                WebauthnError::CredentialNotFound => AuthError::PasskeyNotRecognised,
                other => AuthError::PasskeyVerificationFailed(other.to_string()),
            })?;

        let credential_id = encode_credential_id(result.cred_id())?;
        let passkey_repo = PasskeyRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let Some(passkey) = passkey_repo
            .find_by_credential_id(&credential_id)
            .await?
            .filter(|passkey| passkey.user_id == pending.user_id)
        else {
            return Err(AuthError::PasskeyNotRecognised.into());
        };

        let Some(user) = user_repo.find_by_id(pending.user_id).await? else {
            return Err(AuthError::PasskeyNotRecognised.into());
        };

        if !user.active {
            return Err(AuthError::AccountNotActivated(user.id).into());
        }

        let mut stored = decode_credential(&passkey)?;
        stored.update_credential(&result);

        let now = Utc::now();
        passkey_repo
            .record_usage(
                PasskeyUsageParam {
                    passkey_id: passkey.id,
                    public_key: serde_json::to_string(&stored)?,
                    counter: i64::from(result.counter()),
                },
                now,
            )
            .await?;

        user_repo.update_last_login(user.id, now).await?;

        tracing::debug!("User {} logged in with passkey {}", user.id, passkey.id);

        Ok(User {
            last_login: Some(now),
            ..user
        })
    }
}
