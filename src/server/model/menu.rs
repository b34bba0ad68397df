//! Menu item domain models and parameters.
//!
//! Menu items reference their owning restaurant; listing and get operations
//! expand that reference into a small restaurant summary (the `populate`
//! behavior of the public API).

use chrono::{DateTime, Utc};

use crate::model::menu::{
    CreateMenuItemDto, MenuItemDto, MenuRestaurantDto, PaginatedMenuItemsDto, UpdateMenuItemDto,
};

/// Menu item entity paired with its (optionally loaded) owning restaurant.
///
/// Returned by the repository for queries that join the restaurant table.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemWithRestaurant {
    pub item: entity::menu_item::Model,
    pub restaurant: Option<entity::restaurant::Model>,
}

/// Summary of the owning restaurant embedded in a menu item.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantRef {
    pub id: i32,
    pub name: String,
    pub address: String,
}

/// Menu item with its expanded restaurant reference.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: i32,
    pub restaurant: Option<RestaurantRef>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MenuItem {
    /// Converts the menu item domain model to a DTO for API responses.
    pub fn into_dto(self) -> MenuItemDto {
        MenuItemDto {
            id: self.id,
            restaurant: self.restaurant.map(|r| MenuRestaurantDto {
                id: r.id,
                name: r.name,
                address: r.address,
            }),
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts a joined entity pair to a menu item domain model at the
    /// repository boundary. Only the restaurant's id, name, and address are
    /// carried over.
    pub fn from_with_restaurant(result: MenuItemWithRestaurant) -> Self {
        Self {
            id: result.item.id,
            restaurant: result.restaurant.map(|r| RestaurantRef {
                id: r.id,
                name: r.name,
                address: r.address,
            }),
            name: result.item.name,
            description: result.item.description,
            price: result.item.price,
            category: result.item.category,
            created_at: result.item.created_at,
            updated_at: result.item.updated_at,
        }
    }
}

/// Parameters for creating a menu item.
#[derive(Debug, Clone)]
pub struct CreateMenuItemParams {
    pub restaurant_id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
}

impl CreateMenuItemParams {
    /// Converts the request DTO into creation parameters.
    pub fn from_dto(dto: CreateMenuItemDto) -> Self {
        Self {
            restaurant_id: dto.restaurant_id,
            name: dto.name,
            description: dto.description,
            price: dto.price,
            category: dto.category,
        }
    }
}

/// Parameters for a partial menu item update. `None` fields are left untouched.
#[derive(Debug, Clone)]
pub struct UpdateMenuItemParams {
    pub restaurant_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

impl UpdateMenuItemParams {
    /// Converts the request DTO into update parameters.
    pub fn from_dto(dto: UpdateMenuItemDto) -> Self {
        Self {
            restaurant_id: dto.restaurant_id,
            name: dto.name,
            description: dto.description,
            price: dto.price,
            category: dto.category,
        }
    }
}

/// Parameters for paginated, sorted, optionally filtered menu listings.
#[derive(Debug, Clone)]
pub struct MenuListParams {
    /// One-indexed page number.
    pub page: u64,
    /// Rows per page.
    pub limit: u64,
    /// Requested sort field; unknown names fall back to the default (`price`).
    pub sort_by: Option<String>,
    /// Sort direction; ascending unless explicitly descending.
    pub descending: bool,
    /// Restrict the listing to one restaurant's menu.
    pub restaurant_id: Option<i32>,
}

/// Paginated collection of menu items with listing metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedMenuItems {
    pub menus: Vec<MenuItem>,
    /// Total rows matching the filter regardless of pagination.
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl PaginatedMenuItems {
    /// Converts the paginated menu items domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedMenuItemsDto {
        PaginatedMenuItemsDto {
            page: self.page,
            limit: self.limit,
            total: self.total,
            menus: self.menus.into_iter().map(|m| m.into_dto()).collect(),
        }
    }
}
