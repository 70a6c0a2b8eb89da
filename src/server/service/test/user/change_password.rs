use super::*;

async fn user_with_password(db: &sea_orm::DatabaseConnection) -> Result<User, AppError> {
    let created = factory::user::UserFactory::new(db)
        .password_hash(hash_password("current password")?)
        .build()
        .await?;

    Ok(User::from_entity(created))
}

/// Tests changing the password with the correct current password.
///
/// Expected: Ok(()) and the new password verifies
#[tokio::test]
async fn changes_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = user_with_password(db).await?;

    let service = UserService::new(db);
    service
        .change_password(&user, "current password", "brand new password")
        .await?;

    let stored = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert!(verify_password("brand new password", &stored.password_hash));

    Ok(())
}

/// Tests changing the password with a wrong current password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_current_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = user_with_password(db).await?;

    let service = UserService::new(db);
    let result = service
        .change_password(&user, "guessed password", "brand new password")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests changing to a password that is too short.
///
/// Expected: Err(AppError::BadRequest) and the old password still valid
#[tokio::test]
async fn rejects_weak_new_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = user_with_password(db).await?;

    let service = UserService::new(db);
    let result = service.change_password(&user, "current password", "short").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let stored = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert!(verify_password("current password", &stored.password_hash));

    Ok(())
}

/// Tests changing the password of an account created through OAuth.
///
/// Expected: Err(AppError::BadRequest) and the stored hash unchanged
#[tokio::test]
async fn rejects_oauth_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = User {
        external_source: Some("github".to_string()),
        ..user_with_password(db).await?
    };

    let service = UserService::new(db);
    let result = service
        .change_password(&user, "current password", "brand new password")
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let stored = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.password_hash, user.password_hash);

    Ok(())
}
