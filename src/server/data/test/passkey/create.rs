use super::*;

/// Tests registering a credential and listing it for its owner.
///
/// Expected: Ok with the passkey listed for its owner only
#[tokio::test]
async fn stores_credential_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = PasskeyRepository::new(db);
    let passkey = repo
        .create(CreatePasskeyParam {
            user_id: owner.id,
            credential_id: "Y3JlZGVudGlhbA".to_string(),
            public_key: "{}".to_string(),
            counter: 0,
            device_name: Some("Laptop".to_string()),
        })
        .await?;

    let owned = repo.get_by_user(owner.id).await?;
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].id, passkey.id);
    assert!(owned[0].last_used_at.is_none());
    assert!(repo.get_by_user(other.id).await?.is_empty());

    let found = repo.find_by_credential_id("Y3JlZGVudGlhbA").await?;
    assert_eq!(found.map(|p| p.user_id), Some(owner.id));

    Ok(())
}
