use super::*;

/// Tests resetting with a valid token.
///
/// Expected: Ok(()) with the new password set and the token marked used
#[tokio::test]
async fn valid_token_sets_password_and_marks_used() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = email_service();

    let (user, token) = factory::create_password_reset_token(db).await?;

    let service = AccountService::new(db, &email, APP_URL);
    service.reset_password(&token.token, "new password 1").await?;

    let user = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert!(verify_password("new password 1", &user.password_hash));

    let token = PasswordResetTokenRepository::new(db)
        .find_by_token(&token.token)
        .await?
        .unwrap();
    assert!(token.used);

    Ok(())
}

/// Tests resetting twice with the same token.
///
/// Expected: second attempt Err(AppError::BadRequest) and password unchanged
#[tokio::test]
async fn used_token_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = email_service();

    let (user, token) = factory::create_password_reset_token(db).await?;

    let service = AccountService::new(db, &email, APP_URL);
    service.reset_password(&token.token, "first password").await?;
    let result = service.reset_password(&token.token, "second password").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let user = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert!(verify_password("first password", &user.password_hash));

    Ok(())
}

/// Tests resetting with an expired token.
///
/// Expected: Err(AppError::BadRequest) and the token deleted
#[tokio::test]
async fn expired_token_is_rejected_and_deleted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = email_service();

    let user = factory::create_user(db).await?;
    let token = factory::password_reset_token::PasswordResetTokenFactory::new(db, user.id)
        .expired()
        .build()
        .await?;

    let service = AccountService::new(db, &email, APP_URL);
    let result = service.reset_password(&token.token, "new password 1").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(PasswordResetTokenRepository::new(db)
        .find_by_token(&token.token)
        .await?
        .is_none());

    Ok(())
}

/// Tests resetting with an unknown token or a weak password.
///
/// Expected: Err(AppError::BadRequest) and a valid token left unused
#[tokio::test]
async fn unknown_token_and_weak_password_are_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = email_service();

    let original_hash = hash_password("original password")?;
    let user = factory::user::UserFactory::new(db)
        .password_hash(original_hash)
        .build()
        .await?;
    let token = factory::password_reset_token::PasswordResetTokenFactory::new(db, user.id)
        .build()
        .await?;

    let service = AccountService::new(db, &email, APP_URL);
    let unknown = service.reset_password("missing", "new password 1").await;
    let weak = service.reset_password(&token.token, "short").await;

    assert!(matches!(unknown, Err(AppError::BadRequest(_))));
    assert!(matches!(weak, Err(AppError::BadRequest(_))));

    let token = PasswordResetTokenRepository::new(db)
        .find_by_token(&token.token)
        .await?
        .unwrap();
    assert!(!token.used);

    let user = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert!(verify_password("original password", &user.password_hash));

    Ok(())
}
