use super::*;

/// Tests requesting a reset for an existing account.
///
/// Verifies that unused tokens are replaced while used ones remain, and the new token
/// expires within the hour.
///
/// Expected: Ok(()) with one new unused token
#[tokio::test]
async fn issues_fresh_token_for_known_address() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = email_service();

    let user = factory::user::UserFactory::new(db)
        .email("ada@example.org")
        .build()
        .await?;
    let stale = factory::password_reset_token::PasswordResetTokenFactory::new(db, user.id)
        .build()
        .await?;
    factory::password_reset_token::PasswordResetTokenFactory::new(db, user.id)
        .used()
        .build()
        .await?;

    let service = AccountService::new(db, &email, APP_URL);
    service.forgot_password("ada@example.org").await?;

    let tokens = entity::prelude::PasswordResetToken::find().all(db).await?;
    assert_eq!(tokens.len(), 2);
    assert!(tokens.iter().all(|t| t.token != stale.token));

    let fresh = tokens.iter().find(|t| !t.used).unwrap();
    assert!(fresh.expires_at <= chrono::Utc::now() + chrono::Duration::hours(1));

    Ok(())
}

/// Tests requesting a reset for an unknown address.
///
/// Expected: Ok(()) without creating a token
#[tokio::test]
async fn ignores_unknown_address() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = email_service();

    let service = AccountService::new(db, &email, APP_URL);
    service.forgot_password("nobody@example.org").await?;

    assert_eq!(
        entity::prelude::PasswordResetToken::find().count(db).await?,
        0
    );

    Ok(())
}
