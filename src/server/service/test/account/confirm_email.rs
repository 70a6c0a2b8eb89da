use super::*;

/// Tests confirming with a valid token.
///
/// Verifies that exactly the token's user is activated and its tokens are removed,
/// while other inactive users and their tokens are untouched.
///
/// Expected: Ok(User) with active == true
#[tokio::test]
async fn valid_token_activates_exactly_one_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = email_service();

    let target = factory::user::UserFactory::new(db).active(false).build().await?;
    let other = factory::user::UserFactory::new(db).active(false).build().await?;
    let token = factory::email_confirmation_token::EmailConfirmationTokenFactory::new(db, target.id)
        .build()
        .await?;
    factory::email_confirmation_token::EmailConfirmationTokenFactory::new(db, other.id)
        .build()
        .await?;

    let service = AccountService::new(db, &email, APP_URL);
    let user = service.confirm_email(&token.token).await?;

    assert_eq!(user.id, target.id);
    assert!(user.active);

    let user_repo = UserRepository::new(db);
    let target = user_repo.find_by_id(target.id).await?.unwrap();
    let other = user_repo.find_by_id(other.id).await?.unwrap();
    assert!(target.active);
    assert!(target.activation_code.is_none());
    assert!(!other.active);

    let token_repo = EmailConfirmationTokenRepository::new(db);
    assert!(token_repo.find_by_token(&token.token).await?.is_none());
    assert_eq!(
        entity::prelude::EmailConfirmationToken::find().count(db).await?,
        1
    );

    Ok(())
}

/// Tests confirming with an expired token.
///
/// Expected: Err(AppError::BadRequest), token deleted and user still inactive
#[tokio::test]
async fn expired_token_is_rejected_and_deleted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = email_service();

    let user = factory::user::UserFactory::new(db).active(false).build().await?;
    let token = factory::email_confirmation_token::EmailConfirmationTokenFactory::new(db, user.id)
        .expired()
        .build()
        .await?;

    let service = AccountService::new(db, &email, APP_URL);
    let result = service.confirm_email(&token.token).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let token_repo = EmailConfirmationTokenRepository::new(db);
    assert!(token_repo.find_by_token(&token.token).await?.is_none());

    let user = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert!(!user.active);

    Ok(())
}

/// Tests confirming with a token that was never issued.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn unknown_token_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = email_service();

    let service = AccountService::new(db, &email, APP_URL);
    let result = service.confirm_email("does-not-exist").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
