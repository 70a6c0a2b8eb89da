use super::*;

/// Tests the first login with a provider.
///
/// Expected: Ok(User) active, with `external_source` set to the provider
#[tokio::test]
async fn creates_active_user_for_new_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let http = reqwest::Client::new();
    let client = oauth_client();

    let service = OAuthService::new(db, &http, &client, OAuthProvider::Google);
    let user = service
        .find_or_create_user(profile(Some("ada@example.org")))
        .await?;

    assert!(user.active);
    assert_eq!(user.email, "ada@example.org");
    assert_eq!(user.external_source.as_deref(), Some("google"));
    assert_eq!(user.first_name.as_deref(), Some("Ada"));
    assert!(user.last_login.is_some());

    Ok(())
}

/// Tests logging in with a provider email that already has an unconfirmed account.
///
/// Expected: Ok(User) for the existing account, now active, and no new row
#[tokio::test]
async fn reuses_and_activates_existing_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let http = reqwest::Client::new();
    let client = oauth_client();

    let existing = factory::user::UserFactory::new(db)
        .email("ada@example.org")
        .active(false)
        .build()
        .await?;

    let service = OAuthService::new(db, &http, &client, OAuthProvider::Github);
    let user = service
        .find_or_create_user(profile(Some("ada@example.org")))
        .await?;

    assert_eq!(user.id, existing.id);
    assert!(user.active);
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    let stored = UserRepository::new(db).find_by_id(existing.id).await?.unwrap();
    assert!(stored.active);
    assert!(stored.external_source.is_none());

    Ok(())
}

/// Tests a provider account without a verified email.
///
/// Expected: Err(AppError::BadRequest) and no user created
#[tokio::test]
async fn requires_verified_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let http = reqwest::Client::new();
    let client = oauth_client();

    let service = OAuthService::new(db, &http, &client, OAuthProvider::Github);
    let result = service.find_or_create_user(profile(None)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::User::find().count(db).await?, 0);

    Ok(())
}
