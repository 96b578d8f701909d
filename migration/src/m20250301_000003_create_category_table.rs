use sea_orm_migration::{prelude::*, schema::*};

use crate::util::create_live_unique_index;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(pk_auto(Category::Id))
                    .col(string(Category::Name))
                    .col(string(Category::Alias))
                    .col(string(Category::Description).default(""))
                    .col(integer(Category::Sort).default(0))
                    .col(timestamp_with_time_zone(Category::CreatedAt))
                    .col(timestamp_with_time_zone(Category::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Category::DeletedAt))
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(manager, "category", "name").await?;
        create_live_unique_index(manager, "category", "alias").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Category {
    Table,
    Id,
    Name,
    Alias,
    Description,
    Sort,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
