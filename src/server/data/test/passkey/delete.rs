use super::*;

/// Tests deleting an owned passkey.
///
/// Expected: Ok(true) and the passkey no longer listed
#[tokio::test]
async fn deletes_owned_passkey() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let passkey = factory::create_passkey(db, user.id).await?;

    let repo = PasskeyRepository::new(db);

    assert!(repo.delete(passkey.id, user.id).await?);
    assert!(repo.get_by_user(user.id).await?.is_empty());

    Ok(())
}

/// Tests deleting a passkey owned by another user.
///
/// Expected: Ok(false) and the passkey kept
#[tokio::test]
async fn keeps_passkey_of_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let passkey = factory::create_passkey(db, owner.id).await?;

    let repo = PasskeyRepository::new(db);

    assert!(!repo.delete(passkey.id, intruder.id).await?);
    assert_eq!(repo.get_by_user(owner.id).await?.len(), 1);

    Ok(())
}
