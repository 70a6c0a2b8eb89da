use super::*;

mod require_active_account;

/// Tests guard rejects a session without user.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests guard rejects a session pointing to a deleted account.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_session_of_missing_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(404).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}

/// Tests guard resolves the session user without permissions.
///
/// Expected: Ok(User) for the logged-in account
#[tokio::test]
async fn returns_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("ada")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let returned = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(returned.id, user.id);
    assert_eq!(returned.username, "ada");

    Ok(())
}
