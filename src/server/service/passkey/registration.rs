use dioxus_logger::tracing;
use webauthn_rs::prelude::{
    CreationChallengeResponse, PasskeyRegistration, RegisterPublicKeyCredential, Uuid,
};

use crate::server::{
    data::passkey::PasskeyRepository,
    error::{auth::AuthError, AppError},
    model::{
        passkey::{CreatePasskeyParam, Passkey},
        user::User,
    },
    service::passkey::{
        decode_credential, encode_credential_id, normalize_device_name, PasskeyService,
    },
};

/// WebAuthn user handle of an account.
pub fn user_handle(user_id: i32) -> Uuid {
    Uuid::from_u128(user_id as u32 as u128)
}

impl<'a> PasskeyService<'a> {
    /// Starts registering a new passkey for `user`.
    ///
    /// Credentials the user already registered are excluded so an authenticator is not
    /// enrolled twice. The returned state must be kept in the session until finish.
    pub async fn start_registration(
        &self,
        user: &User,
    ) -> Result<(CreationChallengeResponse, PasskeyRegistration), AppError> {
        let passkey_repo = PasskeyRepository::new(self.db);

        let exclude = passkey_repo
            .get_by_user(user.id)
            .await?
            .iter()
            .map(|passkey| decode_credential(passkey).map(|c| c.cred_id().clone()))
            .collect::<Result<Vec<_>, _>>()?;

        let display_name = user.clone().into_dto().display_name();

        let challenge = self.webauthn.start_passkey_registration(
            user_handle(user.id),
            &user.email,
            &display_name,
            Some(exclude).filter(|ids| !ids.is_empty()),
        )?;

        Ok(challenge)
    }

    /// Verifies the browser's registration response and stores the credential.
    ///
    /// # Arguments
    /// - `user_id` - Account the ceremony was started for
    /// - `state` - State stored by `start_registration`
    /// - `credential` - JSON `PublicKeyCredential` from the browser
    /// - `device_name` - Optional label chosen by the user
    ///
    /// # Returns
    /// - `Ok(Passkey)` - Stored passkey
    /// - `Err(AppError::AuthErr(AuthError::PasskeyVerificationFailed(_)))` - Malformed or
    ///   unverifiable response
    /// - `Err(AppError::BadRequest(_))` - Credential already registered
    pub async fn finish_registration(
        &self,
        user_id: i32,
        state: &PasskeyRegistration,
        credential: serde_json::Value,
        device_name: Option<&str>,
    ) -> Result<Passkey, AppError> {
        let credential: RegisterPublicKeyCredential = serde_json::from_value(credential)
            .map_err(|e| AuthError::PasskeyVerificationFailed(e.to_string()))?;

        let verified = self
            .webauthn
            .finish_passkey_registration(&credential, state)
            .map_err(|e| AuthError::PasskeyVerificationFailed(e.to_string()))?;

        let credential_id = encode_credential_id(verified.cred_id())?;
        let passkey_repo = PasskeyRepository::new(self.db);

        if passkey_repo
            .find_by_credential_id(&credential_id)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(
                "This passkey is already registered".to_string(),
            ));
        }

        let passkey = passkey_repo
            .create(CreatePasskeyParam {
                user_id,
                credential_id,
                public_key: serde_json::to_string(&verified)?,
                counter: 0,
                device_name: normalize_device_name(device_name),
            })
            .await?;

        tracing::info!("User {} registered passkey {}", user_id, passkey.id);

        Ok(passkey)
    }
}
