use super::*;

/// Tests a complete registration ceremony.
///
/// Expected: Ok with the passkey stored for the user, counter 0 and never used
#[tokio::test]
async fn stores_verified_credential() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let webauthn = webauthn();
    let service = PasskeyService::new(db, &webauthn);

    let user = create_user(db, true).await?;
    let passkey = enroll(&service, &user, &mut authenticator()).await?;

    assert_eq!(passkey.user_id, user.id);
    assert_eq!(passkey.device_name.as_deref(), Some("Soft key"));
    assert_eq!(passkey.counter, 0);
    assert!(passkey.last_used_at.is_none());

    let stored = service.list(user.id).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].credential_id, passkey.credential_id);

    Ok(())
}

/// Tests finishing the same registration response twice.
///
/// Expected: Err(AppError::BadRequest) and still a single stored passkey
#[tokio::test]
async fn duplicate_credential_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let webauthn = webauthn();
    let service = PasskeyService::new(db, &webauthn);

    let user = create_user(db, true).await?;
    let (options, state) = service.start_registration(&user).await?;
    let credential = authenticator().do_registration(origin(), options).unwrap();
    let credential = serde_json::to_value(&credential)?;

    service
        .finish_registration(user.id, &state, credential.clone(), None)
        .await?;
    let result = service
        .finish_registration(user.id, &state, credential, None)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.list(user.id).await?.len(), 1);

    Ok(())
}

/// Tests a registration response that is not a credential.
///
/// Expected: Err(AuthError::PasskeyVerificationFailed) and nothing stored
#[tokio::test]
async fn malformed_response_fails_verification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let webauthn = webauthn();
    let service = PasskeyService::new(db, &webauthn);

    let user = create_user(db, true).await?;
    let (_, state) = service.start_registration(&user).await?;

    let result = service
        .finish_registration(user.id, &state, serde_json::json!({ "id": "x" }), None)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::PasskeyVerificationFailed(_)))
    ));
    assert!(service.list(user.id).await?.is_empty());

    Ok(())
}
