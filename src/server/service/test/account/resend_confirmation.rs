use super::*;

/// Tests resending the confirmation email for an inactive account.
///
/// Expected: Ok(()) with the old token replaced by a new one
#[tokio::test]
async fn replaces_token_of_inactive_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = email_service();

    let user = factory::user::UserFactory::new(db)
        .email("ada@example.org")
        .active(false)
        .build()
        .await?;
    let old = factory::email_confirmation_token::EmailConfirmationTokenFactory::new(db, user.id)
        .build()
        .await?;

    let service = AccountService::new(db, &email, APP_URL);
    service.resend_confirmation("ada@example.org").await?;

    let tokens = entity::prelude::EmailConfirmationToken::find().all(db).await?;
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].user_id, user.id);
    assert_ne!(tokens[0].token, old.token);

    Ok(())
}

/// Tests resending for active and unknown addresses.
///
/// Expected: Ok(()) without creating tokens
#[tokio::test]
async fn ignores_active_and_unknown_addresses() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let email = email_service();

    factory::user::UserFactory::new(db)
        .email("active@example.org")
        .build()
        .await?;

    let service = AccountService::new(db, &email, APP_URL);
    service.resend_confirmation("active@example.org").await?;
    service.resend_confirmation("nobody@example.org").await?;

    assert_eq!(
        entity::prelude::EmailConfirmationToken::find().count(db).await?,
        0
    );

    Ok(())
}
