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
                    .table(Image::Table)
                    .if_not_exists()
                    .col(pk_auto(Image::Id))
                    .col(string(Image::Title))
                    .col(big_integer(Image::Hash))
                    .col(timestamp_with_time_zone(Image::CreatedAt))
                    .col(timestamp_with_time_zone(Image::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Image::DeletedAt))
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(manager, "image", "hash").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Image::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Image {
    Table,
    Id,
    Title,
    Hash,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
