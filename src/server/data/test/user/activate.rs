use super::*;

/// Tests activating an account awaiting confirmation.
///
/// Verifies that only the targeted user is activated and its activation code cleared.
///
/// Expected: Ok(true) with exactly one user changed
#[tokio::test]
async fn activates_only_target_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::user::UserFactory::new(db).active(false).build().await?;
    let other = factory::user::UserFactory::new(db).active(false).build().await?;

    let repo = UserRepository::new(db);
    let activated = repo.activate(target.id).await?;

    assert!(activated);

    let target = repo.find_by_id(target.id).await?.unwrap();
    assert!(target.active);
    assert!(target.activation_code.is_none());

    let other = repo.find_by_id(other.id).await?.unwrap();
    assert!(!other.active);
    assert!(other.activation_code.is_some());

    Ok(())
}

/// Tests activating a user id that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.activate(999).await?);

    Ok(())
}
