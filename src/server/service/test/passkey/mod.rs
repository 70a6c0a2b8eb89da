use crate::server::{
    error::{auth::AuthError, AppError},
    model::{passkey::Passkey, user::User},
    service::passkey::PasskeyService,
};
use test_utils::{builder::TestBuilder, factory};
use webauthn_authenticator_rs::{softpasskey::SoftPasskey, WebauthnAuthenticator};
use webauthn_rs::{Webauthn, WebauthnBuilder};

mod delete;
mod finish_login;
mod finish_registration;
mod rename;
mod start_login;

const ORIGIN: &str = "http://localhost:8080";

fn origin() -> url::Url {
    url::Url::parse(ORIGIN).unwrap()
}

fn webauthn() -> Webauthn {
    WebauthnBuilder::new("localhost", &origin())
        .unwrap()
        .rp_name("Catalog")
        .build()
        .unwrap()
}

/// Software authenticator that reports user verification.
fn authenticator() -> WebauthnAuthenticator<SoftPasskey> {
    WebauthnAuthenticator::new(SoftPasskey::new(true))
}

/// Creates a user row and returns it as a domain user.
async fn create_user(db: &sea_orm::DatabaseConnection, active: bool) -> Result<User, AppError> {
    let user = factory::user::UserFactory::new(db)
        .active(active)
        .build()
        .await?;

    Ok(User::from_entity(user))
}

/// Runs a full registration ceremony for `user` with `authenticator`.
async fn enroll(
    service: &PasskeyService<'_>,
    user: &User,
    authenticator: &mut WebauthnAuthenticator<SoftPasskey>,
) -> Result<Passkey, AppError> {
    let (options, state) = service.start_registration(user).await?;
    let credential = authenticator.do_registration(origin(), options).unwrap();

    service
        .finish_registration(
            user.id,
            &state,
            serde_json::to_value(&credential)?,
            Some("Soft key"),
        )
        .await
}
