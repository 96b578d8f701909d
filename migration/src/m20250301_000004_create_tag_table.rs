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
                    .table(Tag::Table)
                    .if_not_exists()
                    .col(pk_auto(Tag::Id))
                    .col(string(Tag::Name))
                    .col(string(Tag::Description).default(""))
                    .col(timestamp_with_time_zone(Tag::CreatedAt))
                    .col(timestamp_with_time_zone(Tag::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Tag::DeletedAt))
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(manager, "tag", "name").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Tag {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
