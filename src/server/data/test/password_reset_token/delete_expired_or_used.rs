use super::*;

/// Tests cleanup of expired and redeemed reset tokens.
///
/// Expected: Ok(2) with only the valid unused token remaining
#[tokio::test]
async fn deletes_expired_and_used_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let expired = factory::password_reset_token::PasswordResetTokenFactory::new(db, user.id)
        .expired()
        .build()
        .await?;
    let used = factory::password_reset_token::PasswordResetTokenFactory::new(db, user.id)
        .used()
        .build()
        .await?;
    let valid = factory::password_reset_token::PasswordResetTokenFactory::new(db, user.id)
        .build()
        .await?;

    let repo = PasswordResetTokenRepository::new(db);
    let deleted = repo.delete_expired_or_used(Utc::now()).await?;

    assert_eq!(deleted, 2);
    assert!(repo.find_by_token(&expired.token).await?.is_none());
    assert!(repo.find_by_token(&used.token).await?.is_none());
    assert!(repo.find_by_token(&valid.token).await?.is_some());

    Ok(())
}
