use super::*;

/// Tests marking a reset token as redeemed.
///
/// Expected: Ok with `used` set on the stored token
#[tokio::test]
async fn marks_token_used() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, token) = factory::create_password_reset_token(db).await?;

    let repo = PasswordResetTokenRepository::new(db);
    repo.mark_used(token.id).await?;

    let stored = repo.find_by_token(&token.token).await?.unwrap();
    assert!(stored.used);

    Ok(())
}
