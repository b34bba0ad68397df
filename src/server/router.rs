use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, menu, restaurant, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "menuboard API",
        description = "Restaurant directory API: accounts, restaurants, and menus",
        version = "1.0.0"
    ),
    paths(
        auth::register,
        auth::login,
        user::get_user_by_id,
        user::update_user,
        user::delete_user,
        user::get_all_users,
        restaurant::get_all_restaurants,
        restaurant::get_restaurant_by_id,
        restaurant::create_restaurant,
        restaurant::update_restaurant,
        restaurant::delete_restaurant,
        menu::get_all_menus,
        menu::get_menus_by_restaurant,
        menu::get_menu_by_id,
        menu::create_menu_item,
        menu::update_menu_item,
        menu::delete_menu_item,
    ),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "user", description = "Account management"),
        (name = "restaurant", description = "Restaurant directory"),
        (name = "menu", description = "Restaurant menus")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/user/register", post(auth::register))
        .route("/api/user/login", post(auth::login))
        .route("/api/user", get(user::get_all_users))
        .route(
            "/api/user/{id}",
            get(user::get_user_by_id)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/api/restaurants",
            get(restaurant::get_all_restaurants).post(restaurant::create_restaurant),
        )
        .route(
            "/api/restaurants/{id}",
            get(restaurant::get_restaurant_by_id)
                .put(restaurant::update_restaurant)
                .delete(restaurant::delete_restaurant),
        )
        .route(
            "/api/menus",
            get(menu::get_all_menus).post(menu::create_menu_item),
        )
        .route(
            "/api/menus/restaurant/{restaurant_id}",
            get(menu::get_menus_by_restaurant),
        )
        .route(
            "/api/menus/{id}",
            get(menu::get_menu_by_id)
                .put(menu::update_menu_item)
                .delete(menu::delete_menu_item),
        )
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
