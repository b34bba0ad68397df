use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000002_create_restaurant_table::Restaurant;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItem::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuItem::Id))
                    .col(integer(MenuItem::RestaurantId))
                    .col(string_len(MenuItem::Name, 255))
                    .col(string_len(MenuItem::Description, 1024))
                    .col(double(MenuItem::Price))
                    .col(string_len(MenuItem::Category, 255))
                    .col(timestamp_with_time_zone(MenuItem::CreatedAt))
                    .col(timestamp_with_time_zone(MenuItem::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_item_restaurant")
                            .from(MenuItem::Table, MenuItem::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuItem {
    Table,
    Id,
    RestaurantId,
    Name,
    Description,
    Price,
    Category,
    CreatedAt,
    UpdatedAt,
}
