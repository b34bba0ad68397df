//! Restaurant factory for creating test restaurant entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test restaurants with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::restaurant::RestaurantFactory;
///
/// let restaurant = RestaurantFactory::new(&db)
///     .name("Chez Test")
///     .build()
///     .await?;
/// ```
pub struct RestaurantFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: String,
    phone: String,
    opening_hours: String,
}

impl<'a> RestaurantFactory<'a> {
    /// Creates a new RestaurantFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Restaurant {id}"` where id is auto-incremented
    /// - address: `"{id} Main Street"`
    /// - phone: `"555-0100"`
    /// - opening_hours: `"Mon-Sun 9:00-22:00"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Restaurant {}", id),
            address: format!("{} Main Street", id),
            phone: "555-0100".to_string(),
            opening_hours: "Mon-Sun 9:00-22:00".to_string(),
        }
    }

    /// Sets the name for the restaurant.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the address for the restaurant.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the phone number for the restaurant.
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the opening hours description for the restaurant.
    pub fn opening_hours(mut self, opening_hours: impl Into<String>) -> Self {
        self.opening_hours = opening_hours.into();
        self
    }

    /// Builds and inserts the restaurant entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::restaurant::Model)` - Created restaurant entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::restaurant::Model, DbErr> {
        let now = Utc::now();
        entity::restaurant::ActiveModel {
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            phone: ActiveValue::Set(self.phone),
            opening_hours: ActiveValue::Set(self.opening_hours),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a restaurant with default values.
///
/// Shorthand for `RestaurantFactory::new(db).build().await`.
pub async fn create_restaurant(db: &DatabaseConnection) -> Result<entity::restaurant::Model, DbErr> {
    RestaurantFactory::new(db).build().await
}
