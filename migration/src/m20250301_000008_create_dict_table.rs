use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_image_table::Image;
use crate::util::create_live_unique_index;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dict::Table)
                    .if_not_exists()
                    .col(pk_auto(Dict::Id))
                    .col(string(Dict::Name))
                    .col(string(Dict::Code))
                    .col(text(Dict::Extra))
                    .col(string(Dict::Description).default(""))
                    .col(integer_null(Dict::ParentId))
                    .col(integer_null(Dict::ImageId))
                    .col(timestamp_with_time_zone(Dict::CreatedAt))
                    .col(timestamp_with_time_zone(Dict::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Dict::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dict_parent_id")
                            .from(Dict::Table, Dict::ParentId)
                            .to(Dict::Table, Dict::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dict_image_id")
                            .from(Dict::Table, Dict::ImageId)
                            .to(Image::Table, Image::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_dict_parent_id")
                    .table(Dict::Table)
                    .col(Dict::ParentId)
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(manager, "dict", "name").await?;
        create_live_unique_index(manager, "dict", "code").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dict::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Dict {
    Table,
    Id,
    Name,
    Code,
    Extra,
    Description,
    ParentId,
    ImageId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
