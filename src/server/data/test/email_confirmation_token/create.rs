use super::*;

/// Tests storing a confirmation token and finding it by value.
///
/// Expected: Ok with the token found and linked to the user
#[tokio::test]
async fn stores_and_finds_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).active(false).build().await?;

    let repo = EmailConfirmationTokenRepository::new(db);
    let created = repo
        .create(CreateTokenParam {
            user_id: user.id,
            token: "confirm-me".to_string(),
            expires_at: Utc::now() + Duration::hours(24),
        })
        .await?;

    let found = repo.find_by_token("confirm-me").await?.unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.user_id, user.id);
    assert!(!found.is_expired(Utc::now()));
    assert!(repo.find_by_token("other").await?.is_none());

    Ok(())
}
