use super::*;

/// Tests finding an existing account by email.
///
/// Expected: Ok(Some(Model)) with matching data
#[tokio::test]
async fn finds_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("findme@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("findme@example.com").await?;

    assert_eq!(found.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests querying an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("nobody@example.com").await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests finding an existing account by id.
///
/// Expected: Ok(Some(Model))
#[tokio::test]
async fn finds_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_id(created.id).await?;

    assert_eq!(found.map(|u| u.email), Some(created.email));

    Ok(())
}

/// Tests querying an unknown id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let found = repo.find_by_id(9999).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests listing every account, ordered by username.
///
/// Expected: Ok(Vec<Model>) in alphabetical order
#[tokio::test]
async fn all_returns_accounts_ordered_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("bravo")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("alpha")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let users = repo.all().await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].username, "alpha");
    assert_eq!(users[1].username, "bravo");

    Ok(())
}
