use super::*;

/// Tests inserting a menu item returns it with the restaurant joined.
///
/// Expected: Ok(MenuItemWithRestaurant) with Some(restaurant)
#[tokio::test]
async fn inserts_and_joins_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;

    let repo = MenuItemRepository::new(db);

    let created = repo
        .insert(CreateMenuItemParams {
            restaurant_id: restaurant.id,
            name: "Margherita".to_string(),
            description: "Tomato, mozzarella, basil".to_string(),
            price: 11.5,
            category: "Pizza".to_string(),
        })
        .await?;

    assert_eq!(created.item.name, "Margherita");
    assert_eq!(created.item.restaurant_id, restaurant.id);
    assert_eq!(created.restaurant.map(|r| r.id), Some(restaurant.id));

    Ok(())
}

/// Tests finding a menu item by id, and the miss case.
///
/// Expected: Ok(Some) with the joined restaurant, Ok(None) for unknown ids
#[tokio::test]
async fn finds_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, item) = factory::helpers::create_menu_item_with_restaurant(db).await?;

    let repo = MenuItemRepository::new(db);

    let found = repo.find_by_id(item.id).await?.unwrap();
    assert_eq!(found.item.id, item.id);
    assert_eq!(found.restaurant.map(|r| r.id), Some(restaurant.id));

    assert!(repo.find_by_id(9999).await?.is_none());

    Ok(())
}

/// Tests a partial update touches only the present fields.
///
/// Expected: Ok(Some) with the new price and the old name
#[tokio::test]
async fn updates_present_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let item = factory::menu_item::MenuItemFactory::new(db, restaurant.id)
        .name("Stays")
        .price(10.0)
        .build()
        .await?;

    let repo = MenuItemRepository::new(db);

    let updated = repo
        .update(
            item.id,
            UpdateMenuItemParams {
                restaurant_id: None,
                name: None,
                description: None,
                price: Some(12.5),
                category: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.item.name, "Stays");
    assert_eq!(updated.item.price, 12.5);

    Ok(())
}

/// Tests updating a missing menu item.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_returns_none_for_missing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MenuItemRepository::new(db);

    let updated = repo
        .update(
            9999,
            UpdateMenuItemParams {
                restaurant_id: None,
                name: Some("Ghost".to_string()),
                description: None,
                price: None,
                category: None,
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}

/// Tests deleting a menu item, and the miss case.
///
/// Expected: Ok(true) then Ok(false) for the same id
#[tokio::test]
async fn deletes_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_restaurant, item) = factory::helpers::create_menu_item_with_restaurant(db).await?;

    let repo = MenuItemRepository::new(db);

    assert!(repo.delete(item.id).await?);
    assert!(!repo.delete(item.id).await?);

    Ok(())
}
