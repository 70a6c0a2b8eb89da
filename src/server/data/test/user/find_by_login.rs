use super::*;

/// Tests login lookup by email address.
///
/// Expected: Ok(Some(user))
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("ada@example.org")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_login("ada@example.org").await?;

    assert_eq!(user.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests login lookup by username.
///
/// Expected: Ok(Some(user))
#[tokio::test]
async fn finds_user_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("lovelace")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_login("lovelace").await?;

    assert_eq!(user.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests login lookup for an unknown login.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_login() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_login("nobody").await?.is_none());

    Ok(())
}
