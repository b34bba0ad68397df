//! Menu item factory for creating test menu item entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test menu items with customizable fields.
///
/// Menu items always belong to a restaurant, so the owning restaurant id is a
/// required constructor argument. Use `helpers::create_menu_item_with_restaurant`
/// when the test does not care about the restaurant itself.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::menu_item::MenuItemFactory;
///
/// let item = MenuItemFactory::new(&db, restaurant.id)
///     .name("Margherita")
///     .price(11.5)
///     .build()
///     .await?;
/// ```
pub struct MenuItemFactory<'a> {
    db: &'a DatabaseConnection,
    restaurant_id: i32,
    name: String,
    description: String,
    price: f64,
    category: String,
}

impl<'a> MenuItemFactory<'a> {
    /// Creates a new MenuItemFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Item {id}"` where id is auto-incremented
    /// - description: `"Test menu item {id}"`
    /// - price: `9.99`
    /// - category: `"Main"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `restaurant_id` - Id of the owning restaurant
    pub fn new(db: &'a DatabaseConnection, restaurant_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            restaurant_id,
            name: format!("Item {}", id),
            description: format!("Test menu item {}", id),
            price: 9.99,
            category: "Main".to_string(),
        }
    }

    /// Sets the name for the menu item.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description for the menu item.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the price for the menu item.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the category for the menu item.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builds and inserts the menu item entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::menu_item::Model)` - Created menu item entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::menu_item::Model, DbErr> {
        let now = Utc::now();
        entity::menu_item::ActiveModel {
            restaurant_id: ActiveValue::Set(self.restaurant_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            category: ActiveValue::Set(self.category),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a menu item with default values for the given restaurant.
///
/// Shorthand for `MenuItemFactory::new(db, restaurant_id).build().await`.
pub async fn create_menu_item(
    db: &DatabaseConnection,
    restaurant_id: i32,
) -> Result<entity::menu_item::Model, DbErr> {
    MenuItemFactory::new(db, restaurant_id).build().await
}
