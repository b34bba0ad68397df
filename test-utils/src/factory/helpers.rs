//! Shared helpers for test data factories.

use sea_orm::{DatabaseConnection, DbErr};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// Returns a process-wide unique counter value.
///
/// Used by factories to derive unique usernames, emails, and names so that
/// repeated factory calls never collide on unique columns.
pub fn next_id() -> usize {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Creates a menu item together with its owning restaurant.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((restaurant, menu_item))` - Created restaurant and a menu item owned by it
/// - `Err(DbErr)` - Database error during insert
pub async fn create_menu_item_with_restaurant(
    db: &DatabaseConnection,
) -> Result<(entity::restaurant::Model, entity::menu_item::Model), DbErr> {
    let restaurant = crate::factory::restaurant::create_restaurant(db).await?;
    let item = crate::factory::menu_item::create_menu_item(db, restaurant.id).await?;

    Ok((restaurant, item))
}
