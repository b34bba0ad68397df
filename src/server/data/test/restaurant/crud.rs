use super::*;

/// Tests inserting a restaurant.
///
/// Expected: Ok(Model) with the given fields and an assigned id
#[tokio::test]
async fn inserts_and_returns_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Restaurant)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RestaurantRepository::new(db);

    let restaurant = repo
        .insert(CreateRestaurantParams {
            name: "Chez Test".to_string(),
            address: "1 Test Lane".to_string(),
            phone: "555-0123".to_string(),
            opening_hours: "Mon-Fri 11:00-23:00".to_string(),
        })
        .await?;

    assert!(restaurant.id > 0);
    assert_eq!(restaurant.name, "Chez Test");
    assert_eq!(restaurant.opening_hours, "Mon-Fri 11:00-23:00");

    Ok(())
}

/// Tests finding a restaurant by id, and the miss case.
///
/// Expected: Ok(Some) for a stored row, Ok(None) otherwise
#[tokio::test]
async fn finds_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Restaurant)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_restaurant(db).await?;

    let repo = RestaurantRepository::new(db);

    assert!(repo.find_by_id(created.id).await?.is_some());
    assert!(repo.find_by_id(9999).await?.is_none());

    Ok(())
}

/// Tests the existence check used for menu references.
///
/// Expected: true for a stored row, false otherwise
#[tokio::test]
async fn exists_reports_presence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Restaurant)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_restaurant(db).await?;

    let repo = RestaurantRepository::new(db);

    assert!(repo.exists(created.id).await?);
    assert!(!repo.exists(9999).await?);

    Ok(())
}

/// Tests a partial update touches only the present fields.
///
/// Expected: Ok(Some(Model)) with the new phone and the old name
#[tokio::test]
async fn updates_present_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Restaurant)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::restaurant::RestaurantFactory::new(db)
        .name("Stays")
        .phone("555-0100")
        .build()
        .await?;

    let repo = RestaurantRepository::new(db);

    let updated = repo
        .update(
            created.id,
            UpdateRestaurantParams {
                name: None,
                address: None,
                phone: Some("555-0199".to_string()),
                opening_hours: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Stays");
    assert_eq!(updated.phone, "555-0199");

    Ok(())
}

/// Tests updating a missing restaurant.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_returns_none_for_missing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Restaurant)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RestaurantRepository::new(db);

    let updated = repo
        .update(
            9999,
            UpdateRestaurantParams {
                name: Some("Ghost".to_string()),
                address: None,
                phone: None,
                opening_hours: None,
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}

/// Tests deleting a restaurant, and the miss case.
///
/// Expected: Ok(true) then Ok(false) for the same id
#[tokio::test]
async fn deletes_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Restaurant)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_restaurant(db).await?;

    let repo = RestaurantRepository::new(db);

    assert!(repo.delete(created.id).await?);
    assert!(!repo.delete(created.id).await?);

    Ok(())
}
