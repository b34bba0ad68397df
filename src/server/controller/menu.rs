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
        menu::{CreateMenuItemDto, MenuItemDto, PaginatedMenuItemsDto, UpdateMenuItemDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::menu::{CreateMenuItemParams, MenuListParams, UpdateMenuItemParams},
        service::menu::MenuService,
        state::AppState,
    },
};

/// Tag for grouping menu endpoints in OpenAPI documentation
pub static MENU_TAG: &str = "menu";

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
    /// Restrict the listing to one restaurant's menu.
    pub restaurant_id: Option<i32>,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

/// List menu items with sorting, pagination, and optional restaurant filter.
///
/// Public endpoint. Sorts by `price` ascending unless overridden via the
/// `sortBy` and `sortOrder` query parameters. Each item carries its expanded
/// owning restaurant (id, name, address).
///
/// # Returns
/// - `200 OK` - Page of menu items with `{page, limit, total}` metadata
/// - `400 Bad Request` - Database error
#[utoipa::path(
    get,
    path = "/api/menus",
    tag = MENU_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("sortBy" = Option<String>, Query, description = "Sort field (default: price)"),
        ("sortOrder" = Option<String>, Query, description = "asc (default) or desc"),
        ("restaurant_id" = Option<i32>, Query, description = "Only items of this restaurant")
    ),
    responses(
        (status = 200, description = "Page of menu items", body = PaginatedMenuItemsDto),
        (status = 400, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn get_all_menus(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = MenuService::new(&state.db);

    let menus = service
        .list(MenuListParams {
            page: params.page,
            limit: params.limit,
            sort_by: params.sort_by,
            descending: params.sort_order.as_deref() == Some("desc"),
            restaurant_id: params.restaurant_id,
        })
        .await?;

    Ok((StatusCode::OK, Json(menus.into_dto())))
}

/// List one restaurant's menu items.
///
/// Public endpoint. Same behavior as the general listing with the restaurant
/// filter fixed by the route.
///
/// # Returns
/// - `200 OK` - Page of the restaurant's menu items
/// - `400 Bad Request` - Database error
#[utoipa::path(
    get,
    path = "/api/menus/restaurant/{restaurant_id}",
    tag = MENU_TAG,
    params(
        ("restaurant_id" = i32, Path, description = "Restaurant id"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("sortBy" = Option<String>, Query, description = "Sort field (default: price)"),
        ("sortOrder" = Option<String>, Query, description = "asc (default) or desc")
    ),
    responses(
        (status = 200, description = "Page of the restaurant's menu items", body = PaginatedMenuItemsDto),
        (status = 400, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn get_menus_by_restaurant(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i32>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = MenuService::new(&state.db);

    let menus = service
        .list(MenuListParams {
            page: params.page,
            limit: params.limit,
            sort_by: params.sort_by,
            descending: params.sort_order.as_deref() == Some("desc"),
            restaurant_id: Some(restaurant_id),
        })
        .await?;

    Ok((StatusCode::OK, Json(menus.into_dto())))
}

/// Get a menu item by id.
///
/// Public endpoint. The item carries its expanded owning restaurant.
///
/// # Returns
/// - `200 OK` - The menu item
/// - `404 Not Found` - No menu item with that id
#[utoipa::path(
    get,
    path = "/api/menus/{id}",
    tag = MENU_TAG,
    params(
        ("id" = i32, Path, description = "Menu item id")
    ),
    responses(
        (status = 200, description = "The menu item", body = MenuItemDto),
        (status = 404, description = "Menu item not found", body = ErrorDto)
    ),
)]
pub async fn get_menu_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MenuService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(item) => Ok((StatusCode::OK, Json(item.into_dto()))),
        None => Err(AppError::NotFound("Menu item not found".to_string())),
    }
}

/// Create a menu item.
///
/// The restaurant reference must resolve and the price must be non-negative.
///
/// # Access Control
/// - `Admin` - Only admins can create menu items
///
/// # Returns
/// - `201 Created` - The created menu item
/// - `400 Bad Request` - Invalid token, bad reference, negative price, or database error
/// - `401 Unauthorized` - Missing token
/// - `403 Forbidden` - Authenticated but not an admin
#[utoipa::path(
    post,
    path = "/api/menus",
    tag = MENU_TAG,
    request_body = CreateMenuItemDto,
    responses(
        (status = 201, description = "The created menu item", body = MenuItemDto),
        (status = 400, description = "Invalid token or invalid item", body = ErrorDto),
        (status = 401, description = "Missing token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn create_menu_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateMenuItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _claims = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let service = MenuService::new(&state.db);

    let item = service.create(CreateMenuItemParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

/// Update a menu item.
///
/// Applies a partial field merge; present fields are held to the same
/// constraints as at creation.
///
/// # Access Control
/// - `Admin` - Only admins can update menu items
///
/// # Returns
/// - `200 OK` - The updated menu item
/// - `400 Bad Request` - Invalid token, bad reference, negative price, or database error
/// - `401 Unauthorized` - Missing token
/// - `403 Forbidden` - Authenticated but not an admin
/// - `404 Not Found` - No menu item with that id
#[utoipa::path(
    put,
    path = "/api/menus/{id}",
    tag = MENU_TAG,
    params(
        ("id" = i32, Path, description = "Menu item id")
    ),
    request_body = UpdateMenuItemDto,
    responses(
        (status = 200, description = "The updated menu item", body = MenuItemDto),
        (status = 400, description = "Invalid token or invalid item", body = ErrorDto),
        (status = 401, description = "Missing token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Menu item not found", body = ErrorDto)
    ),
)]
pub async fn update_menu_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    Json(payload): Json<UpdateMenuItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _claims = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let service = MenuService::new(&state.db);

    match service
        .update(id, UpdateMenuItemParams::from_dto(payload))
        .await?
    {
        Some(item) => Ok((StatusCode::OK, Json(item.into_dto()))),
        None => Err(AppError::NotFound("Menu item not found".to_string())),
    }
}

/// Delete a menu item.
///
/// # Access Control
/// - `Admin` - Only admins can delete menu items
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `400 Bad Request` - Invalid token or database error
/// - `401 Unauthorized` - Missing token
/// - `403 Forbidden` - Authenticated but not an admin
/// - `404 Not Found` - No menu item with that id
#[utoipa::path(
    delete,
    path = "/api/menus/{id}",
    tag = MENU_TAG,
    params(
        ("id" = i32, Path, description = "Menu item id")
    ),
    responses(
        (status = 200, description = "Menu item deleted", body = MessageDto),
        (status = 400, description = "Invalid token or database error", body = ErrorDto),
        (status = 401, description = "Missing token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Menu item not found", body = ErrorDto)
    ),
)]
pub async fn delete_menu_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _claims = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let service = MenuService::new(&state.db);

    if service.delete(id).await? {
        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "Menu item deleted successfully".to_string(),
            }),
        ))
    } else {
        Err(AppError::NotFound("Menu item not found".to_string()))
    }
}
