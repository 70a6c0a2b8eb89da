use super::*;

/// Tests renaming an owned passkey.
///
/// Expected: Ok(Passkey) with the trimmed name
#[tokio::test]
async fn renames_owned_passkey() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let webauthn = webauthn();

    let user = factory::create_user(db).await?;
    let passkey = factory::create_passkey(db, user.id).await?;

    let service = PasskeyService::new(db, &webauthn);
    let renamed = service.rename(passkey.id, user.id, "  Work laptop ").await?;

    assert_eq!(renamed.device_name.as_deref(), Some("Work laptop"));

    Ok(())
}

/// Tests renaming a passkey of another user and renaming to a blank name.
///
/// Expected: Err(AppError::NotFound) and Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_foreign_passkey_and_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let webauthn = webauthn();

    let owner = factory::create_user(db).await?;
    let passkey = factory::create_passkey(db, owner.id).await?;
    let other = factory::create_user(db).await?;

    let service = PasskeyService::new(db, &webauthn);
    let foreign = service.rename(passkey.id, other.id, "Mine now").await;
    let blank = service.rename(passkey.id, owner.id, "   ").await;

    assert!(matches!(foreign, Err(AppError::NotFound(_))));
    assert!(matches!(blank, Err(AppError::BadRequest(_))));

    Ok(())
}
