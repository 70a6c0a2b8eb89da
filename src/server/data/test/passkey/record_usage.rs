use super::*;

/// Tests storing the credential state after a login.
///
/// Expected: Ok(Some(passkey)) with counter, record and last use updated
#[tokio::test]
async fn updates_counter_and_last_use() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let passkey = factory::create_passkey(db, user.id).await?;

    let repo = PasskeyRepository::new(db);
    let now = Utc::now();
    let updated = repo
        .record_usage(
            PasskeyUsageParam {
                passkey_id: passkey.id,
                public_key: "{\"updated\":true}".to_string(),
                counter: 7,
            },
            now,
        )
        .await?
        .unwrap();

    assert_eq!(updated.counter, 7);
    assert_eq!(updated.public_key, "{\"updated\":true}");
    assert!(updated.last_used_at.is_some());

    Ok(())
}
