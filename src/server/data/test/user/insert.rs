use super::*;

/// Tests inserting a new account.
///
/// Verifies that the repository persists the given fields, assigns an id,
/// and defaults the admin flag to false.
///
/// Expected: Ok(Model) with matching fields
#[tokio::test]
async fn inserts_and_returns_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let user = repo
        .insert(create_params("newuser", "newuser@example.com"))
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "newuser");
    assert_eq!(user.email, "newuser@example.com");
    assert_eq!(user.password, "stored-digest");
    assert!(!user.is_admin);

    Ok(())
}

/// Tests the unique index on email.
///
/// A second insert with the same email must fail at the store even though
/// the username differs.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.insert(create_params("first", "taken@example.com"))
        .await?;

    let result = repo
        .insert(create_params("second", "taken@example.com"))
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests the unique index on username.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.insert(create_params("taken", "first@example.com"))
        .await?;

    let result = repo
        .insert(create_params("taken", "second@example.com"))
        .await;

    assert!(result.is_err());

    Ok(())
}
