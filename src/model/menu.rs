use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Owning restaurant summary embedded in menu item responses.
///
/// Listing endpoints expand the restaurant reference into this selection of
/// fields rather than returning the bare foreign key.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct MenuRestaurantDto {
    pub id: i32,
    pub name: String,
    pub address: String,
}

/// Menu item as returned by the API.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDto {
    pub id: i32,
    /// Expanded owning restaurant; None when the referenced row is gone.
    pub restaurant: Option<MenuRestaurantDto>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Menu item creation request body.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuItemDto {
    pub restaurant_id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
}

/// Partial menu item update request body. All fields optional.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenuItemDto {
    pub restaurant_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

/// Paginated menu item listing response body.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PaginatedMenuItemsDto {
    pub page: u64,
    pub limit: u64,
    /// Total matching rows regardless of pagination.
    pub total: u64,
    pub menus: Vec<MenuItemDto>,
}
