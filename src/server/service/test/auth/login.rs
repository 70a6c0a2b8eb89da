use super::*;

/// Tests logging in with email and with username.
///
/// Expected: Ok(User) and last_login recorded
#[tokio::test]
async fn accepts_email_or_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("ada")
        .email("ada@example.org")
        .password_hash(hash_password("correct horse")?)
        .build()
        .await?;

    let service = AuthService::new(db);
    let by_email = service.login("ada@example.org", "correct horse").await?;
    let by_username = service.login("ada", "correct horse").await?;

    assert_eq!(by_email.id, created.id);
    assert_eq!(by_username.id, created.id);

    let stored = UserRepository::new(db).find_by_id(created.id).await?.unwrap();
    assert!(stored.last_login.is_some());

    Ok(())
}

/// Tests wrong passwords and unknown accounts.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_invalid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("ada@example.org")
        .password_hash(hash_password("correct horse")?)
        .build()
        .await?;

    let service = AuthService::new(db);
    let wrong_password = service.login("ada@example.org", "wrong horse").await;
    let unknown = service.login("nobody@example.org", "correct horse").await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in before confirming the email address.
///
/// Expected: Err(AuthError::AccountNotActivated) with the right password only
#[tokio::test]
async fn inactive_account_needs_confirmation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("ada@example.org")
        .password_hash(hash_password("correct horse")?)
        .active(false)
        .build()
        .await?;

    let service = AuthService::new(db);
    let right = service.login("ada@example.org", "correct horse").await;
    let wrong = service.login("ada@example.org", "wrong horse").await;

    assert!(matches!(
        right,
        Err(AppError::AuthErr(AuthError::AccountNotActivated(id))) if id == user.id
    ));
    assert!(matches!(
        wrong,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
