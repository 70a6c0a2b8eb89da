use super::*;

/// Tests starting a passkey login for an unknown address.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn unknown_email_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let webauthn = webauthn();

    let service = PasskeyService::new(db, &webauthn);
    let result = service.start_login("nobody@example.org").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests starting a passkey login for an account without passkeys.
///
/// Expected: Err(AppError::BadRequest) with the same message as an unknown address
#[tokio::test]
async fn account_without_passkeys_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let webauthn = webauthn();

    factory::user::UserFactory::new(db)
        .email("ada@example.org")
        .build()
        .await?;

    let service = PasskeyService::new(db, &webauthn);
    let known = service.start_login("ada@example.org").await;
    let unknown = service.start_login("nobody@example.org").await;

    match (known, unknown) {
        (Err(AppError::BadRequest(a)), Err(AppError::BadRequest(b))) => assert_eq!(a, b),
        _ => panic!("expected matching bad requests"),
    }

    Ok(())
}
