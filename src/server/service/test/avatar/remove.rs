use super::*;

/// Tests removing an uploaded avatar.
///
/// Expected: Ok(()) with the file deleted and `image` cleared
#[tokio::test]
async fn deletes_file_and_clears_image() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = avatar_dir("remove");

    let user = User::from_entity(factory::create_user(db).await?);
    let service = AvatarService::new(db, &dir);
    let user = service.upload(user, "image/gif", b"gif").await?;
    let path = stored_file(&dir, user.image.as_deref().unwrap());

    service.remove(&user).await?;

    assert!(!path.exists());
    let stored = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert!(stored.image.is_none());

    Ok(())
}

/// Tests removing an avatar that points outside the avatar directory.
///
/// Expected: Ok(()) with `image` cleared and no file touched
#[tokio::test]
async fn leaves_foreign_paths_alone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = avatar_dir("foreign");

    let outside = dir.join("keep.png");
    std::fs::write(&outside, b"keep")?;

    let created = factory::user::UserFactory::new(db)
        .image("/avatars/../keep.png")
        .build()
        .await?;
    let user = User::from_entity(created);

    let service = AvatarService::new(db, &dir.join("nested"));
    service.remove(&user).await?;

    assert!(outside.exists());
    let stored = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert!(stored.image.is_none());

    Ok(())
}
