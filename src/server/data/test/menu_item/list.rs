use super::*;

/// Tests listing joins each item with its owning restaurant.
///
/// Expected: every row carries Some(restaurant) with matching id
#[tokio::test]
async fn joins_owning_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, _item) = factory::helpers::create_menu_item_with_restaurant(db).await?;

    let repo = MenuItemRepository::new(db);

    let (rows, total) = repo.list(list_params(1, 10, None)).await?;

    assert_eq!(total, 1);
    let joined = rows[0].restaurant.as_ref().unwrap();
    assert_eq!(joined.id, restaurant.id);
    assert_eq!(joined.name, restaurant.name);
    assert_eq!(joined.address, restaurant.address);

    Ok(())
}

/// Tests the restaurant filter restricts rows and the total alike.
///
/// Expected: only the filtered restaurant's items, total counts them only
#[tokio::test]
async fn filters_by_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_restaurant(db).await?;
    let second = factory::create_restaurant(db).await?;

    factory::create_menu_item(db, first.id).await?;
    factory::create_menu_item(db, first.id).await?;
    factory::create_menu_item(db, second.id).await?;

    let repo = MenuItemRepository::new(db);

    let (rows, total) = repo.list(list_params(1, 10, Some(first.id))).await?;

    assert_eq!(total, 2);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.item.restaurant_id == first.id));

    Ok(())
}

/// Tests the default sort is by price, ascending.
///
/// Expected: cheapest item first
#[tokio::test]
async fn sorts_by_price_ascending_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;

    factory::menu_item::MenuItemFactory::new(db, restaurant.id)
        .name("Pricey")
        .price(24.0)
        .build()
        .await?;
    factory::menu_item::MenuItemFactory::new(db, restaurant.id)
        .name("Cheap")
        .price(4.5)
        .build()
        .await?;

    let repo = MenuItemRepository::new(db);

    let (rows, _) = repo.list(list_params(1, 10, None)).await?;

    assert_eq!(rows[0].item.name, "Cheap");
    assert_eq!(rows[1].item.name, "Pricey");

    Ok(())
}

/// Tests pagination against two stored items.
///
/// Expected: page 2 with limit 1 yields one row, total stays 2
#[tokio::test]
async fn paginates_with_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    factory::create_menu_item(db, restaurant.id).await?;
    factory::create_menu_item(db, restaurant.id).await?;

    let repo = MenuItemRepository::new(db);

    let (rows, total) = repo.list(list_params(2, 1, None)).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(total, 2);

    Ok(())
}
