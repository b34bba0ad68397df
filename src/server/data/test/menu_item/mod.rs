use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::menu_item::MenuItemRepository,
    model::menu::{CreateMenuItemParams, MenuListParams, UpdateMenuItemParams},
};

mod crud;
mod list;

fn list_params(page: u64, limit: u64, restaurant_id: Option<i32>) -> MenuListParams {
    MenuListParams {
        page,
        limit,
        sort_by: None,
        descending: false,
        restaurant_id,
    }
}
