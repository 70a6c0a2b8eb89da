use super::*;

/// Tests a complete login ceremony.
///
/// Expected: Ok(User) and the passkey's usage recorded
#[tokio::test]
async fn records_usage_on_login() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let webauthn = webauthn();
    let service = PasskeyService::new(db, &webauthn);

    let user = create_user(db, true).await?;
    let mut key = authenticator();
    let passkey = enroll(&service, &user, &mut key).await?;

    let (options, pending) = service.start_login(&user.email).await?;
    let assertion = key.do_authentication(origin(), options).unwrap();

    let logged_in = service
        .finish_login(&pending, serde_json::to_value(&assertion)?)
        .await?;

    assert_eq!(logged_in.id, user.id);
    assert!(logged_in.last_login.is_some());

    let stored = service.list(user.id).await?;
    assert_eq!(stored[0].id, passkey.id);
    assert!(stored[0].last_used_at.is_some());
    assert!(stored[0].counter >= passkey.counter);

    Ok(())
}

/// Tests answering a login with a credential that was not offered for the account.
///
/// Expected: Err(AuthError::PasskeyNotRecognised)
#[tokio::test]
async fn credential_of_other_account_is_not_recognised() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let webauthn = webauthn();
    let service = PasskeyService::new(db, &webauthn);

    let ada = create_user(db, true).await?;
    let bob = create_user(db, true).await?;
    enroll(&service, &ada, &mut authenticator()).await?;
    let mut bobs_key = authenticator();
    enroll(&service, &bob, &mut bobs_key).await?;

    let (_, ada_pending) = service.start_login(&ada.email).await?;
    let (bob_options, _) = service.start_login(&bob.email).await?;
    let assertion = bobs_key.do_authentication(origin(), bob_options).unwrap();

    let result = service
        .finish_login(&ada_pending, serde_json::to_value(&assertion)?)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::PasskeyNotRecognised))
    ));

    Ok(())
}

/// Tests a passkey login for an account whose email is not confirmed.
///
/// Expected: Err(AuthError::AccountNotActivated) and the passkey left untouched
#[tokio::test]
async fn inactive_account_does_not_record_usage() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let webauthn = webauthn();
    let service = PasskeyService::new(db, &webauthn);

    let user = create_user(db, false).await?;
    let mut key = authenticator();
    enroll(&service, &user, &mut key).await?;

    let (options, pending) = service.start_login(&user.email).await?;
    let assertion = key.do_authentication(origin(), options).unwrap();

    let result = service
        .finish_login(&pending, serde_json::to_value(&assertion)?)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountNotActivated(_)))
    ));

    let stored = service.list(user.id).await?;
    assert!(stored[0].last_used_at.is_none());
    assert_eq!(stored[0].counter, 0);

    Ok(())
}
