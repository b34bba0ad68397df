//! Restaurant business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::restaurant::RestaurantRepository,
    error::AppError,
    model::restaurant::{
        CreateRestaurantParams, PaginatedRestaurants, Restaurant, RestaurantListParams,
        UpdateRestaurantParams,
    },
};

pub struct RestaurantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a sorted page of restaurants with listing metadata.
    ///
    /// The echoed page number is the effective one: page values below one
    /// read (and report) the first page.
    pub async fn list(
        &self,
        mut params: RestaurantListParams,
    ) -> Result<PaginatedRestaurants, AppError> {
        params.page = params.page.max(1);

        let page = params.page;
        let limit = params.limit;

        let repo = RestaurantRepository::new(self.db);

        let (rows, total) = repo.list(params).await?;

        Ok(PaginatedRestaurants {
            restaurants: rows.into_iter().map(Restaurant::from_entity).collect(),
            total,
            page,
            limit,
        })
    }

    /// Gets a restaurant by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Restaurant>, AppError> {
        let repo = RestaurantRepository::new(self.db);

        let restaurant = repo.find_by_id(id).await?;

        Ok(restaurant.map(Restaurant::from_entity))
    }

    /// Creates a new restaurant.
    pub async fn create(&self, params: CreateRestaurantParams) -> Result<Restaurant, AppError> {
        let repo = RestaurantRepository::new(self.db);

        let created = repo.insert(params).await?;

        Ok(Restaurant::from_entity(created))
    }

    /// Applies a partial update to a restaurant.
    ///
    /// # Returns
    /// - `Ok(Some(Restaurant))` - The updated restaurant
    /// - `Ok(None)` - No restaurant with that id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateRestaurantParams,
    ) -> Result<Option<Restaurant>, AppError> {
        let repo = RestaurantRepository::new(self.db);

        let updated = repo.update(id, params).await?;

        Ok(updated.map(Restaurant::from_entity))
    }

    /// Deletes a restaurant by id.
    ///
    /// # Returns
    /// - `Ok(true)` - The restaurant existed and was removed
    /// - `Ok(false)` - No restaurant with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = RestaurantRepository::new(self.db);

        let deleted = repo.delete(id).await?;

        Ok(deleted)
    }
}
