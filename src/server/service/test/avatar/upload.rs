use super::*;

/// Tests uploading an avatar and then replacing it.
///
/// Verifies the file is written, `image` points at it and the previous file is removed.
///
/// Expected: Ok(User) with only the newest file on disk
#[tokio::test]
async fn stores_file_and_replaces_previous() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = avatar_dir("upload");

    let user = User::from_entity(factory::create_user(db).await?);

    let service = AvatarService::new(db, &dir);
    let first = service.upload(user, "image/png", b"first").await?;
    let first_image = first.image.clone().unwrap();
    let first_path = stored_file(&dir, &first_image);
    assert_eq!(std::fs::read(&first_path)?, b"first");

    let second = service.upload(first, "image/webp", b"second").await?;
    let second_image = second.image.clone().unwrap();

    assert!(second_image.starts_with(AVATAR_URL_PREFIX));
    assert!(second_image.ends_with(".webp"));
    assert!(!first_path.exists());
    assert_eq!(std::fs::read(stored_file(&dir, &second_image))?, b"second");

    let stored = UserRepository::new(db).find_by_id(second.id).await?.unwrap();
    assert_eq!(stored.image, Some(second_image));

    Ok(())
}

/// Tests uploads with a wrong type or size.
///
/// Expected: Err(AppError::BadRequest) and nothing written
#[tokio::test]
async fn rejects_bad_uploads() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = avatar_dir("reject");

    let user = User::from_entity(factory::create_user(db).await?);
    let service = AvatarService::new(db, &dir);

    let svg = service.upload(user.clone(), "image/svg+xml", b"<svg/>").await;
    let empty = service.upload(user.clone(), "image/png", b"").await;
    let too_large = service
        .upload(user.clone(), "image/png", &vec![0u8; MAX_AVATAR_BYTES + 1])
        .await;

    assert!(matches!(svg, Err(AppError::BadRequest(_))));
    assert!(matches!(empty, Err(AppError::BadRequest(_))));
    assert!(matches!(too_large, Err(AppError::BadRequest(_))));
    assert_eq!(std::fs::read_dir(&dir)?.count(), 0);

    Ok(())
}

/// Tests an upload whose database update fails.
///
/// The service runs against a database without the account tables, so storing the
/// image path fails after the file has been written.
///
/// Expected: Err(AppError::DbErr) and no file left in the avatar directory
#[tokio::test]
async fn failed_update_removes_written_file() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = User::from_entity(factory::create_user(db).await?);

    let empty = TestBuilder::new().build().await.unwrap();
    let empty_db = empty.db.as_ref().unwrap();
    let dir = avatar_dir("failed-update");

    let service = AvatarService::new(empty_db, &dir);
    let result = service.upload(user, "image/png", b"orphan").await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(std::fs::read_dir(&dir)?.count(), 0);

    Ok(())
}
