use super::*;

/// Tests pagination returns the requested slice plus the overall total.
///
/// Two stored rows with page=2, limit=1 must yield exactly one row and a
/// total of two.
///
/// Expected: Ok((1 row, total 2))
#[tokio::test]
async fn paginates_with_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Restaurant)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::restaurant::RestaurantFactory::new(db)
        .name("Alpha Diner")
        .build()
        .await?;
    factory::restaurant::RestaurantFactory::new(db)
        .name("Bravo Bistro")
        .build()
        .await?;

    let repo = RestaurantRepository::new(db);

    let (rows, total) = repo.list(list_params(2, 1)).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(total, 2);
    // Second page of a name-ascending sort
    assert_eq!(rows[0].name, "Bravo Bistro");

    Ok(())
}

/// Tests the default sort is by name, ascending.
///
/// Expected: rows in alphabetical order
#[tokio::test]
async fn sorts_by_name_ascending_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Restaurant)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::restaurant::RestaurantFactory::new(db)
        .name("Zebra Grill")
        .build()
        .await?;
    factory::restaurant::RestaurantFactory::new(db)
        .name("Acorn Cafe")
        .build()
        .await?;

    let repo = RestaurantRepository::new(db);

    let (rows, _) = repo.list(list_params(1, 10)).await?;

    assert_eq!(rows[0].name, "Acorn Cafe");
    assert_eq!(rows[1].name, "Zebra Grill");

    Ok(())
}

/// Tests descending order is honored.
///
/// Expected: rows in reverse alphabetical order
#[tokio::test]
async fn sorts_descending_when_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Restaurant)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::restaurant::RestaurantFactory::new(db)
        .name("Acorn Cafe")
        .build()
        .await?;
    factory::restaurant::RestaurantFactory::new(db)
        .name("Zebra Grill")
        .build()
        .await?;

    let repo = RestaurantRepository::new(db);

    let (rows, _) = repo
        .list(RestaurantListParams {
            page: 1,
            limit: 10,
            sort_by: None,
            descending: true,
        })
        .await?;

    assert_eq!(rows[0].name, "Zebra Grill");
    assert_eq!(rows[1].name, "Acorn Cafe");

    Ok(())
}

/// Tests an unknown sort field falls back to the default.
///
/// Expected: rows in name order despite the bogus field
#[tokio::test]
async fn falls_back_to_default_sort_for_unknown_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Restaurant)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::restaurant::RestaurantFactory::new(db)
        .name("Beta Bar")
        .build()
        .await?;
    factory::restaurant::RestaurantFactory::new(db)
        .name("Alpha Diner")
        .build()
        .await?;

    let repo = RestaurantRepository::new(db);

    let (rows, _) = repo
        .list(RestaurantListParams {
            page: 1,
            limit: 10,
            sort_by: Some("bogus".to_string()),
            descending: false,
        })
        .await?;

    assert_eq!(rows[0].name, "Alpha Diner");

    Ok(())
}

/// Tests page values below one read the first page.
///
/// Expected: same rows as page 1
#[tokio::test]
async fn clamps_page_below_one() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Restaurant)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_restaurant(db).await?;

    let repo = RestaurantRepository::new(db);

    let (rows, total) = repo.list(list_params(0, 10)).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(total, 1);

    Ok(())
}
