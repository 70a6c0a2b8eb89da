use super::*;

/// Tests updating the profile fields.
///
/// Expected: Ok(User) with trimmed values and blanks cleared
#[tokio::test]
async fn updates_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Ada", "Lovelace")
        .build()
        .await?;

    let service = UserService::new(db);
    let updated = service
        .update_profile(UpdateProfileParam::from_dto(
            user.id,
            UpdateProfileDto {
                username: " countess ".to_string(),
                first_name: Some("Augusta".to_string()),
                last_name: Some(" ".to_string()),
                country: Some("UK".to_string()),
                ..Default::default()
            },
        ))
        .await?;

    assert_eq!(updated.username, "countess");
    assert_eq!(updated.first_name.as_deref(), Some("Augusta"));
    assert!(updated.last_name.is_none());
    assert_eq!(updated.country.as_deref(), Some("UK"));

    Ok(())
}

/// Tests updating with an empty username.
///
/// Expected: Err(AppError::BadRequest) and the username unchanged
#[tokio::test]
async fn rejects_blank_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).username("ada").build().await?;

    let service = UserService::new(db);
    let result = service
        .update_profile(UpdateProfileParam::from_dto(
            user.id,
            UpdateProfileDto {
                username: "   ".to_string(),
                ..Default::default()
            },
        ))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let stored = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.username, "ada");

    Ok(())
}
