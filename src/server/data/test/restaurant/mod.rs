use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::restaurant::RestaurantRepository,
    model::restaurant::{CreateRestaurantParams, RestaurantListParams, UpdateRestaurantParams},
};

mod crud;
mod list;

fn list_params(page: u64, limit: u64) -> RestaurantListParams {
    RestaurantListParams {
        page,
        limit,
        sort_by: None,
        descending: false,
    }
}
