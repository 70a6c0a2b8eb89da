use super::*;

fn param(email: &str) -> RegisterParam {
    RegisterParam {
        username: "ada".to_string(),
        email: email.to_string(),
        password: "correct horse".to_string(),
        first_name: Some("Ada".to_string()),
        last_name: None,
    }
}

/// Tests registering a new account.
///
/// Verifies that the account is inactive with an activation code, the password is
/// hashed and a confirmation token valid for about a day exists.
///
/// Expected: Ok(User) with one confirmation token
#[tokio::test]
async fn creates_inactive_user_with_confirmation_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = email_service();

    let service = AccountService::new(db, &email, APP_URL);
    let user = service.register(param("ada@example.org")).await?;

    assert!(!user.active);
    assert!(user.activation_code.is_some());
    assert_ne!(user.password_hash, "correct horse");
    assert!(verify_password("correct horse", &user.password_hash));

    let tokens = entity::prelude::EmailConfirmationToken::find().all(db).await?;
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].user_id, user.id);
    assert!(tokens[0].expires_at > chrono::Utc::now() + chrono::Duration::hours(23));

    Ok(())
}

/// Tests registering with an email address that already has an account.
///
/// Expected: Err(AppError::BadRequest) and no second user
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = email_service();

    factory::user::UserFactory::new(db)
        .email("ada@example.org")
        .build()
        .await?;

    let service = AccountService::new(db, &email, APP_URL);
    let result = service.register(param("ada@example.org")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}

/// Tests registration input validation.
///
/// Expected: Err(AppError::BadRequest) for a bad email, short password or blank username
#[tokio::test]
async fn rejects_invalid_input() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = email_service();

    let service = AccountService::new(db, &email, APP_URL);

    let bad_email = service.register(param("not-an-email")).await;
    let short_password = service
        .register(RegisterParam {
            password: "short".to_string(),
            ..param("ada@example.org")
        })
        .await;
    let blank_username = service
        .register(RegisterParam {
            username: String::new(),
            ..param("ada@example.org")
        })
        .await;

    assert!(matches!(bad_email, Err(AppError::BadRequest(_))));
    assert!(matches!(short_password, Err(AppError::BadRequest(_))));
    assert!(matches!(blank_username, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::User::find().count(db).await?, 0);

    Ok(())
}
