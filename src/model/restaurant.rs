use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Restaurant as returned by the API.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub opening_hours: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Restaurant creation request body.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantDto {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub opening_hours: String,
}

/// Partial restaurant update request body. All fields optional.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRestaurantDto {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub opening_hours: Option<String>,
}

/// Paginated restaurant listing response body.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PaginatedRestaurantsDto {
    pub page: u64,
    pub limit: u64,
    /// Total matching rows regardless of pagination.
    pub total: u64,
    pub restaurants: Vec<RestaurantDto>,
}
