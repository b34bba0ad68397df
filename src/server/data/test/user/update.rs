use super::*;

/// Tests a partial update touches only the present fields.
///
/// Expected: Ok(Some(Model)) with the new username and the old email
#[tokio::test]
async fn updates_present_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("before")
        .email("keep@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let updated = repo
        .update(
            created.id,
            UpdateUserParams {
                username: Some("after".to_string()),
                email: None,
                password: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.username, "after");
    assert_eq!(updated.email, "keep@example.com");
    assert_eq!(updated.password, created.password);

    Ok(())
}

/// Tests updating refreshes the modification timestamp.
///
/// Expected: updated_at at or after the creation timestamp
#[tokio::test]
async fn refreshes_updated_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    let updated = repo
        .update(
            created.id,
            UpdateUserParams {
                username: Some("renamed".to_string()),
                email: None,
                password: None,
            },
        )
        .await?
        .unwrap();

    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

/// Tests updating a missing account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let updated = repo
        .update(
            9999,
            UpdateUserParams {
                username: Some("ghost".to_string()),
                email: None,
                password: None,
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
