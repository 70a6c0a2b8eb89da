use super::*;

/// Tests removing all tokens of one user.
///
/// Verifies that tokens of other users are kept.
///
/// Expected: Ok(2) with the other user's token remaining
#[tokio::test]
async fn deletes_only_tokens_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).active(false).build().await?;
    let other = factory::user::UserFactory::new(db).active(false).build().await?;

    factory::email_confirmation_token::EmailConfirmationTokenFactory::new(db, user.id)
        .build()
        .await?;
    factory::email_confirmation_token::EmailConfirmationTokenFactory::new(db, user.id)
        .expired()
        .build()
        .await?;
    let kept = factory::email_confirmation_token::EmailConfirmationTokenFactory::new(db, other.id)
        .build()
        .await?;

    let repo = EmailConfirmationTokenRepository::new(db);
    let deleted = repo.delete_by_user(user.id).await?;

    assert_eq!(deleted, 2);
    assert!(repo.find_by_token(&kept.token).await?.is_some());

    Ok(())
}
