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
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::Nickname))
                    .col(string(User::Phone))
                    .col(string(User::Username))
                    .col(string(User::PasswordHash))
                    .col(boolean(User::IsSuper).default(false))
                    .col(integer_null(User::ImageId))
                    .col(timestamp_with_time_zone(User::CreatedAt))
                    .col(timestamp_with_time_zone(User::UpdatedAt))
                    .col(timestamp_with_time_zone_null(User::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_image_id")
                            .from(User::Table, User::ImageId)
                            .to(Image::Table, Image::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(manager, "user", "username").await?;
        create_live_unique_index(manager, "user", "phone").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Nickname,
    Phone,
    Username,
    PasswordHash,
    IsSuper,
    ImageId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
