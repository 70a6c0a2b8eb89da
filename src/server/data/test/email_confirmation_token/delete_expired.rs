use super::*;

/// Tests cleanup of expired confirmation tokens.
///
/// Expected: Ok(1) with the valid token remaining
#[tokio::test]
async fn deletes_only_expired_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).active(false).build().await?;

    let expired = factory::email_confirmation_token::EmailConfirmationTokenFactory::new(db, user.id)
        .expired()
        .build()
        .await?;
    let valid = factory::email_confirmation_token::EmailConfirmationTokenFactory::new(db, user.id)
        .build()
        .await?;

    let repo = EmailConfirmationTokenRepository::new(db);
    let deleted = repo.delete_expired(Utc::now()).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_token(&expired.token).await?.is_none());
    assert!(repo.find_by_token(&valid.token).await?.is_some());

    Ok(())
}
