use super::*;

/// Tests renaming an owned passkey.
///
/// Expected: Ok(Some(passkey)) with the new device name
#[tokio::test]
async fn renames_owned_passkey() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let passkey = factory::create_passkey(db, user.id).await?;

    let repo = PasskeyRepository::new(db);
    let renamed = repo
        .rename(passkey.id, user.id, "Phone".to_string())
        .await?
        .unwrap();

    assert_eq!(renamed.device_name.as_deref(), Some("Phone"));

    Ok(())
}

/// Tests renaming a passkey owned by another user.
///
/// Expected: Ok(None) with the name unchanged
#[tokio::test]
async fn ignores_passkey_of_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let passkey = factory::passkey::PasskeyFactory::new(db, owner.id)
        .device_name("Laptop")
        .build()
        .await?;

    let repo = PasskeyRepository::new(db);
    let result = repo
        .rename(passkey.id, intruder.id, "Mine now".to_string())
        .await?;

    assert!(result.is_none());
    let stored = repo.get_by_user(owner.id).await?;
    assert_eq!(stored[0].device_name.as_deref(), Some("Laptop"));

    Ok(())
}
