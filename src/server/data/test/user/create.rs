use super::*;

fn param(email: &str) -> CreateUserParam {
    CreateUserParam {
        username: "ada".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        active: false,
        activation_code: Some("code".to_string()),
        first_name: Some("Ada".to_string()),
        last_name: None,
        external_source: None,
    }
}

/// Tests creating an account awaiting confirmation.
///
/// Verifies that the inactive flag and activation code are stored as given.
///
/// Expected: Ok with inactive user and activation code set
#[tokio::test]
async fn creates_inactive_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(param("ada@example.org")).await?;

    assert_eq!(user.email, "ada@example.org");
    assert!(!user.active);
    assert_eq!(user.activation_code.as_deref(), Some("code"));
    assert!(user.last_login.is_none());

    Ok(())
}

/// Tests the unique email constraint.
///
/// Expected: Err when inserting a second account with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(param("ada@example.org")).await?;
    let result = repo.create(param("ada@example.org")).await;

    assert!(result.is_err());

    Ok(())
}
