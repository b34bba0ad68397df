//! Menu item business logic.
//!
//! Creation and updates confirm that the restaurant reference resolves and
//! that the price is non-negative before touching the store, turning both
//! into clean request errors instead of raw constraint violations.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{menu_item::MenuItemRepository, restaurant::RestaurantRepository},
    error::AppError,
    model::menu::{
        CreateMenuItemParams, MenuItem, MenuListParams, PaginatedMenuItems, UpdateMenuItemParams,
    },
};

pub struct MenuService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a sorted, optionally restaurant-filtered page of menu items.
    ///
    /// Each item carries its expanded restaurant reference. The echoed page
    /// number is the effective one: page values below one read (and report)
    /// the first page.
    pub async fn list(&self, mut params: MenuListParams) -> Result<PaginatedMenuItems, AppError> {
        params.page = params.page.max(1);

        let page = params.page;
        let limit = params.limit;

        let repo = MenuItemRepository::new(self.db);

        let (rows, total) = repo.list(params).await?;

        Ok(PaginatedMenuItems {
            menus: rows.into_iter().map(MenuItem::from_with_restaurant).collect(),
            total,
            page,
            limit,
        })
    }

    /// Gets a menu item by id with its expanded restaurant reference.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<MenuItem>, AppError> {
        let repo = MenuItemRepository::new(self.db);

        let item = repo.find_by_id(id).await?;

        Ok(item.map(MenuItem::from_with_restaurant))
    }

    /// Creates a new menu item.
    ///
    /// # Returns
    /// - `Ok(MenuItem)` - The created item with its expanded restaurant
    /// - `Err(AppError::BadRequest)` - Negative price or unresolvable restaurant reference
    pub async fn create(&self, params: CreateMenuItemParams) -> Result<MenuItem, AppError> {
        check_price(params.price)?;
        self.check_restaurant(params.restaurant_id).await?;

        let repo = MenuItemRepository::new(self.db);

        let created = repo.insert(params).await?;

        Ok(MenuItem::from_with_restaurant(created))
    }

    /// Applies a partial update to a menu item.
    ///
    /// Present fields are held to the same constraints as at creation.
    ///
    /// # Returns
    /// - `Ok(Some(MenuItem))` - The updated item with its expanded restaurant
    /// - `Ok(None)` - No menu item with that id
    /// - `Err(AppError::BadRequest)` - Negative price or unresolvable restaurant reference
    pub async fn update(
        &self,
        id: i32,
        params: UpdateMenuItemParams,
    ) -> Result<Option<MenuItem>, AppError> {
        if let Some(price) = params.price {
            check_price(price)?;
        }
        if let Some(restaurant_id) = params.restaurant_id {
            self.check_restaurant(restaurant_id).await?;
        }

        let repo = MenuItemRepository::new(self.db);

        let updated = repo.update(id, params).await?;

        Ok(updated.map(MenuItem::from_with_restaurant))
    }

    /// Deletes a menu item by id.
    ///
    /// # Returns
    /// - `Ok(true)` - The menu item existed and was removed
    /// - `Ok(false)` - No menu item with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = MenuItemRepository::new(self.db);

        let deleted = repo.delete(id).await?;

        Ok(deleted)
    }

    async fn check_restaurant(&self, restaurant_id: i32) -> Result<(), AppError> {
        let restaurants = RestaurantRepository::new(self.db);

        if !restaurants.exists(restaurant_id).await? {
            return Err(AppError::BadRequest(format!(
                "Restaurant with id {} does not exist",
                restaurant_id
            )));
        }

        Ok(())
    }
}

fn check_price(price: f64) -> Result<(), AppError> {
    if price < 0.0 {
        return Err(AppError::BadRequest(
            "price must be a non-negative number".to_string(),
        ));
    }

    Ok(())
}
