use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurant::Table)
                    .if_not_exists()
                    .col(pk_auto(Restaurant::Id))
                    .col(string_len(Restaurant::Name, 255))
                    .col(string_len(Restaurant::Address, 1024))
                    .col(string_len(Restaurant::Phone, 15))
                    .col(string_len(Restaurant::OpeningHours, 255))
                    .col(timestamp_with_time_zone(Restaurant::CreatedAt))
                    .col(timestamp_with_time_zone(Restaurant::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Restaurant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Restaurant {
    Table,
    Id,
    Name,
    Address,
    Phone,
    OpeningHours,
    CreatedAt,
    UpdatedAt,
}
