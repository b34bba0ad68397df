//! Restaurant domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::restaurant::{
    CreateRestaurantDto, PaginatedRestaurantsDto, RestaurantDto, UpdateRestaurantDto,
};

/// Restaurant with contact details and opening hours.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub opening_hours: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Restaurant {
    /// Converts the restaurant domain model to a DTO for API responses.
    pub fn into_dto(self) -> RestaurantDto {
        RestaurantDto {
            id: self.id,
            name: self.name,
            address: self.address,
            phone: self.phone,
            opening_hours: self.opening_hours,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a restaurant domain model at the repository boundary.
    pub fn from_entity(entity: entity::restaurant::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            phone: entity.phone,
            opening_hours: entity.opening_hours,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for creating a restaurant.
#[derive(Debug, Clone)]
pub struct CreateRestaurantParams {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub opening_hours: String,
}

impl CreateRestaurantParams {
    /// Converts the request DTO into creation parameters.
    pub fn from_dto(dto: CreateRestaurantDto) -> Self {
        Self {
            name: dto.name,
            address: dto.address,
            phone: dto.phone,
            opening_hours: dto.opening_hours,
        }
    }
}

/// Parameters for a partial restaurant update. `None` fields are left untouched.
#[derive(Debug, Clone)]
pub struct UpdateRestaurantParams {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub opening_hours: Option<String>,
}

impl UpdateRestaurantParams {
    /// Converts the request DTO into update parameters.
    pub fn from_dto(dto: UpdateRestaurantDto) -> Self {
        Self {
            name: dto.name,
            address: dto.address,
            phone: dto.phone,
            opening_hours: dto.opening_hours,
        }
    }
}

/// Parameters for paginated, sorted restaurant listings.
#[derive(Debug, Clone)]
pub struct RestaurantListParams {
    /// One-indexed page number.
    pub page: u64,
    /// Rows per page.
    pub limit: u64,
    /// Requested sort field; unknown names fall back to the default (`name`).
    pub sort_by: Option<String>,
    /// Sort direction; ascending unless explicitly descending.
    pub descending: bool,
}

/// Paginated collection of restaurants with listing metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedRestaurants {
    pub restaurants: Vec<Restaurant>,
    /// Total matching rows regardless of pagination.
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl PaginatedRestaurants {
    /// Converts the paginated restaurants domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedRestaurantsDto {
        PaginatedRestaurantsDto {
            page: self.page,
            limit: self.limit,
            total: self.total,
            restaurants: self.restaurants.into_iter().map(|r| r.into_dto()).collect(),
        }
    }
}
