use super::*;

/// Tests deleting passkeys.
///
/// Verifies that another user cannot delete a passkey and the owner can, once.
///
/// Expected: NotFound for the other user, Ok for the owner, NotFound on repeat
#[tokio::test]
async fn only_owner_can_delete() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let webauthn = webauthn();

    let owner = factory::create_user(db).await?;
    let passkey = factory::create_passkey(db, owner.id).await?;
    let other = factory::create_user(db).await?;

    let service = PasskeyService::new(db, &webauthn);

    let foreign = service.delete(passkey.id, other.id).await;
    assert!(matches!(foreign, Err(AppError::NotFound(_))));
    assert_eq!(service.list(owner.id).await?.len(), 1);

    service.delete(passkey.id, owner.id).await?;
    assert!(service.list(owner.id).await?.is_empty());

    let again = service.delete(passkey.id, owner.id).await;
    assert!(matches!(again, Err(AppError::NotFound(_))));

    Ok(())
}
