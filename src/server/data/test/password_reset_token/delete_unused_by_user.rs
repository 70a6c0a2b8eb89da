use super::*;

/// Tests that issuing a new reset link invalidates pending ones.
///
/// Verifies that redeemed tokens are left for the cleanup job.
///
/// Expected: Ok(1) with the used token remaining
#[tokio::test]
async fn deletes_pending_tokens_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, pending) = factory::create_password_reset_token(db).await?;
    let used = factory::password_reset_token::PasswordResetTokenFactory::new(db, user.id)
        .used()
        .build()
        .await?;

    let repo = PasswordResetTokenRepository::new(db);
    let deleted = repo.delete_unused_by_user(user.id).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_token(&pending.token).await?.is_none());
    assert!(repo.find_by_token(&used.token).await?.is_some());

    Ok(())
}
