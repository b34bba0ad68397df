//! Restaurant data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::restaurant::{
    CreateRestaurantParams, RestaurantListParams, UpdateRestaurantParams,
};

pub struct RestaurantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Maps a requested sort field name to a restaurant column.
    ///
    /// Unknown names fall back to the default sort field, `name`.
    fn sort_column(name: &str) -> entity::restaurant::Column {
        match name {
            "address" => entity::restaurant::Column::Address,
            "phone" => entity::restaurant::Column::Phone,
            "openingHours" => entity::restaurant::Column::OpeningHours,
            "createdAt" => entity::restaurant::Column::CreatedAt,
            _ => entity::restaurant::Column::Name,
        }
    }

    /// Gets a sorted page of restaurants plus the total row count.
    ///
    /// The page number is one-indexed; page values below one read the first
    /// page. The total counts every row regardless of pagination.
    ///
    /// # Returns
    /// - `Ok((rows, total))` - Page of restaurant rows and the overall count
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(
        &self,
        params: RestaurantListParams,
    ) -> Result<(Vec<entity::restaurant::Model>, u64), DbErr> {
        let page = params.page.max(1);
        let column = Self::sort_column(params.sort_by.as_deref().unwrap_or("name"));
        let order = if params.descending {
            Order::Desc
        } else {
            Order::Asc
        };

        let total = entity::prelude::Restaurant::find().count(self.db).await?;

        let rows = entity::prelude::Restaurant::find()
            .order_by(column, order)
            .offset((page - 1) * params.limit)
            .limit(params.limit)
            .all(self.db)
            .await?;

        Ok((rows, total))
    }

    /// Finds a restaurant by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::restaurant::Model>, DbErr> {
        entity::prelude::Restaurant::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Checks whether a restaurant with the given id exists.
    ///
    /// Used to confirm that a menu item's restaurant reference resolves
    /// before inserting or updating the item.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Restaurant::find()
            .filter(entity::restaurant::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new restaurant.
    pub async fn insert(
        &self,
        param: CreateRestaurantParams,
    ) -> Result<entity::restaurant::Model, DbErr> {
        let now = Utc::now();

        entity::restaurant::ActiveModel {
            name: ActiveValue::Set(param.name),
            address: ActiveValue::Set(param.address),
            phone: ActiveValue::Set(param.phone),
            opening_hours: ActiveValue::Set(param.opening_hours),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies a partial update to a restaurant.
    ///
    /// Only fields present in the parameters are modified; `updated_at` is
    /// refreshed on every update.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated restaurant row
    /// - `Ok(None)` - No restaurant with that id
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateRestaurantParams,
    ) -> Result<Option<entity::restaurant::Model>, DbErr> {
        let Some(restaurant) = entity::prelude::Restaurant::find_by_id(id).one(self.db).await?
        else {
            return Ok(None);
        };

        let mut active: entity::restaurant::ActiveModel = restaurant.into();

        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(address) = param.address {
            active.address = ActiveValue::Set(address);
        }
        if let Some(phone) = param.phone {
            active.phone = ActiveValue::Set(phone);
        }
        if let Some(opening_hours) = param.opening_hours {
            active.opening_hours = ActiveValue::Set(opening_hours);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Deletes a restaurant by id.
    ///
    /// # Returns
    /// - `Ok(true)` - The restaurant existed and was removed
    /// - `Ok(false)` - No restaurant with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Restaurant::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
