//! Menu item data repository for database operations.
//!
//! Menu queries join the owning restaurant via `find_also_related` so that
//! responses can expand the reference into the restaurant's name and address.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::menu::{
    CreateMenuItemParams, MenuItemWithRestaurant, MenuListParams, UpdateMenuItemParams,
};

pub struct MenuItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Maps a requested sort field name to a menu item column.
    ///
    /// Unknown names fall back to the default sort field, `price`.
    fn sort_column(name: &str) -> entity::menu_item::Column {
        match name {
            "name" => entity::menu_item::Column::Name,
            "category" => entity::menu_item::Column::Category,
            "description" => entity::menu_item::Column::Description,
            "createdAt" => entity::menu_item::Column::CreatedAt,
            _ => entity::menu_item::Column::Price,
        }
    }

    /// Gets a sorted page of menu items with their restaurants joined, plus
    /// the total count of rows matching the filter.
    ///
    /// The page number is one-indexed; page values below one read the first
    /// page. When a restaurant filter is present, the total counts only that
    /// restaurant's items.
    ///
    /// # Returns
    /// - `Ok((rows, total))` - Page of item/restaurant pairs and the filtered count
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(
        &self,
        params: MenuListParams,
    ) -> Result<(Vec<MenuItemWithRestaurant>, u64), DbErr> {
        let page = params.page.max(1);
        let column = Self::sort_column(params.sort_by.as_deref().unwrap_or("price"));
        let order = if params.descending {
            Order::Desc
        } else {
            Order::Asc
        };

        let mut count_query = entity::prelude::MenuItem::find();
        let mut query =
            entity::prelude::MenuItem::find().find_also_related(entity::prelude::Restaurant);

        if let Some(restaurant_id) = params.restaurant_id {
            count_query =
                count_query.filter(entity::menu_item::Column::RestaurantId.eq(restaurant_id));
            query = query.filter(entity::menu_item::Column::RestaurantId.eq(restaurant_id));
        }

        let total = count_query.count(self.db).await?;

        let rows = query
            .order_by(column, order)
            .offset((page - 1) * params.limit)
            .limit(params.limit)
            .all(self.db)
            .await?;

        let items = rows
            .into_iter()
            .map(|(item, restaurant)| MenuItemWithRestaurant { item, restaurant })
            .collect();

        Ok((items, total))
    }

    /// Finds a menu item by id with its restaurant joined.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<MenuItemWithRestaurant>, DbErr> {
        let result = entity::prelude::MenuItem::find_by_id(id)
            .find_also_related(entity::prelude::Restaurant)
            .one(self.db)
            .await?;

        Ok(result.map(|(item, restaurant)| MenuItemWithRestaurant { item, restaurant }))
    }

    /// Inserts a new menu item and returns it with its restaurant joined.
    ///
    /// # Returns
    /// - `Ok(MenuItemWithRestaurant)` - The created item with its restaurant
    /// - `Err(DbErr)` - Database error, including foreign key violations when
    ///   the restaurant reference does not resolve
    pub async fn insert(
        &self,
        param: CreateMenuItemParams,
    ) -> Result<MenuItemWithRestaurant, DbErr> {
        let now = Utc::now();

        let item = entity::menu_item::ActiveModel {
            restaurant_id: ActiveValue::Set(param.restaurant_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            price: ActiveValue::Set(param.price),
            category: ActiveValue::Set(param.category),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        // Refetch with the relation so the response can expand it
        self.find_by_id(item.id).await?.ok_or(DbErr::RecordNotFound(
            format!("Menu item with id {} not found after creation", item.id),
        ))
    }

    /// Applies a partial update to a menu item and returns it with its
    /// restaurant joined.
    ///
    /// Only fields present in the parameters are modified; `updated_at` is
    /// refreshed on every update.
    ///
    /// # Returns
    /// - `Ok(Some(MenuItemWithRestaurant))` - The updated item with its restaurant
    /// - `Ok(None)` - No menu item with that id
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateMenuItemParams,
    ) -> Result<Option<MenuItemWithRestaurant>, DbErr> {
        let Some(item) = entity::prelude::MenuItem::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::menu_item::ActiveModel = item.into();

        if let Some(restaurant_id) = param.restaurant_id {
            active.restaurant_id = ActiveValue::Set(restaurant_id);
        }
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(price) = param.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(category) = param.category {
            active.category = ActiveValue::Set(category);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        self.find_by_id(updated.id).await
    }

    /// Deletes a menu item by id.
    ///
    /// # Returns
    /// - `Ok(true)` - The menu item existed and was removed
    /// - `Ok(false)` - No menu item with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MenuItem::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
