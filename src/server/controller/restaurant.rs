use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        restaurant::{
            CreateRestaurantDto, PaginatedRestaurantsDto, RestaurantDto, UpdateRestaurantDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::restaurant::{
            CreateRestaurantParams, RestaurantListParams, UpdateRestaurantParams,
        },
        service::restaurant::RestaurantService,
        state::AppState,
    },
};

/// Tag for grouping restaurant endpoints in OpenAPI documentation
pub static RESTAURANT_TAG: &str = "restaurant";

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

/// List restaurants with sorting and pagination.
///
/// Public endpoint. Sorts by `name` ascending unless overridden via the
/// `sortBy` and `sortOrder` query parameters.
///
/// # Returns
/// - `200 OK` - Page of restaurants with `{page, limit, total}` metadata
/// - `400 Bad Request` - Database error
#[utoipa::path(
    get,
    path = "/api/restaurants",
    tag = RESTAURANT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("sortBy" = Option<String>, Query, description = "Sort field (default: name)"),
        ("sortOrder" = Option<String>, Query, description = "asc (default) or desc")
    ),
    responses(
        (status = 200, description = "Page of restaurants", body = PaginatedRestaurantsDto),
        (status = 400, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn get_all_restaurants(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = RestaurantService::new(&state.db);

    let restaurants = service
        .list(RestaurantListParams {
            page: params.page,
            limit: params.limit,
            sort_by: params.sort_by,
            descending: params.sort_order.as_deref() == Some("desc"),
        })
        .await?;

    Ok((StatusCode::OK, Json(restaurants.into_dto())))
}

/// Get a restaurant by id.
///
/// Public endpoint.
///
/// # Returns
/// - `200 OK` - The restaurant
/// - `404 Not Found` - No restaurant with that id
#[utoipa::path(
    get,
    path = "/api/restaurants/{id}",
    tag = RESTAURANT_TAG,
    params(
        ("id" = i32, Path, description = "Restaurant id")
    ),
    responses(
        (status = 200, description = "The restaurant", body = RestaurantDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto)
    ),
)]
pub async fn get_restaurant_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = RestaurantService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(restaurant) => Ok((StatusCode::OK, Json(restaurant.into_dto()))),
        None => Err(AppError::NotFound("Restaurant not found".to_string())),
    }
}

/// Create a restaurant.
///
/// # Access Control
/// - `Admin` - Only admins can create restaurants
///
/// # Returns
/// - `201 Created` - The created restaurant
/// - `400 Bad Request` - Invalid token or database error
/// - `401 Unauthorized` - Missing token
/// - `403 Forbidden` - Authenticated but not an admin
#[utoipa::path(
    post,
    path = "/api/restaurants",
    tag = RESTAURANT_TAG,
    request_body = CreateRestaurantDto,
    responses(
        (status = 201, description = "The created restaurant", body = RestaurantDto),
        (status = 400, description = "Invalid token or database error", body = ErrorDto),
        (status = 401, description = "Missing token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn create_restaurant(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateRestaurantDto>,
) -> Result<impl IntoResponse, AppError> {
    let _claims = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let service = RestaurantService::new(&state.db);

    let restaurant = service
        .create(CreateRestaurantParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(restaurant.into_dto())))
}

/// Update a restaurant.
///
/// Applies a partial field merge; absent fields are left untouched.
///
/// # Access Control
/// - `Admin` - Only admins can update restaurants
///
/// # Returns
/// - `200 OK` - The updated restaurant
/// - `400 Bad Request` - Invalid token or database error
/// - `401 Unauthorized` - Missing token
/// - `403 Forbidden` - Authenticated but not an admin
/// - `404 Not Found` - No restaurant with that id
#[utoipa::path(
    put,
    path = "/api/restaurants/{id}",
    tag = RESTAURANT_TAG,
    params(
        ("id" = i32, Path, description = "Restaurant id")
    ),
    request_body = UpdateRestaurantDto,
    responses(
        (status = 200, description = "The updated restaurant", body = RestaurantDto),
        (status = 400, description = "Invalid token or database error", body = ErrorDto),
        (status = 401, description = "Missing token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto)
    ),
)]
pub async fn update_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    Json(payload): Json<UpdateRestaurantDto>,
) -> Result<impl IntoResponse, AppError> {
    let _claims = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let service = RestaurantService::new(&state.db);

    match service
        .update(id, UpdateRestaurantParams::from_dto(payload))
        .await?
    {
        Some(restaurant) => Ok((StatusCode::OK, Json(restaurant.into_dto()))),
        None => Err(AppError::NotFound("Restaurant not found".to_string())),
    }
}

/// Delete a restaurant.
///
/// # Access Control
/// - `Admin` - Only admins can delete restaurants
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `400 Bad Request` - Invalid token or database error
/// - `401 Unauthorized` - Missing token
/// - `403 Forbidden` - Authenticated but not an admin
/// - `404 Not Found` - No restaurant with that id
#[utoipa::path(
    delete,
    path = "/api/restaurants/{id}",
    tag = RESTAURANT_TAG,
    params(
        ("id" = i32, Path, description = "Restaurant id")
    ),
    responses(
        (status = 200, description = "Restaurant deleted", body = MessageDto),
        (status = 400, description = "Invalid token or database error", body = ErrorDto),
        (status = 401, description = "Missing token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto)
    ),
)]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _claims = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let service = RestaurantService::new(&state.db);

    if service.delete(id).await? {
        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "Restaurant deleted successfully".to_string(),
            }),
        ))
    } else {
        Err(AppError::NotFound("Restaurant not found".to_string()))
    }
}
