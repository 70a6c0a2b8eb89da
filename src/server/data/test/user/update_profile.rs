use super::*;

/// Tests updating the editable profile fields.
///
/// Expected: Ok(Some(user)) with new values stored
#[tokio::test]
async fn updates_profile_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .name("Ada", "Byron")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(UpdateProfileParam {
            user_id: created.id,
            username: "lovelace".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            company: Some("Analytical Engines".to_string()),
            country: None,
            bio: Some("Notes on the engine".to_string()),
        })
        .await?
        .unwrap();

    assert_eq!(updated.username, "lovelace");
    assert_eq!(updated.last_name.as_deref(), Some("Lovelace"));
    assert_eq!(updated.company.as_deref(), Some("Analytical Engines"));
    assert_eq!(updated.email, created.email);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_profile(UpdateProfileParam {
            user_id: 42,
            username: "ghost".to_string(),
            first_name: None,
            last_name: None,
            company: None,
            country: None,
            bio: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
