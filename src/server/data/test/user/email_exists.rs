use super::*;

/// Tests email existence check for a registered address.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_registered_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("ada@example.org")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_exists("ada@example.org").await?);
    assert!(repo.email_exists(" ada@example.org ").await?);

    Ok(())
}

/// Tests email existence check for an unknown address.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(!repo.email_exists("nobody@example.org").await?);

    Ok(())
}
