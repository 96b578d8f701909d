use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000002_create_user_table::User, m20250301_000003_create_category_table::Category,
};
use crate::util::create_live_unique_index;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Article::Table)
                    .if_not_exists()
                    .col(pk_auto(Article::Id))
                    .col(string(Article::Title))
                    .col(string(Article::Description))
                    .col(text(Article::Content))
                    .col(integer(Article::Status).default(0))
                    .col(integer(Article::CategoryId))
                    .col(integer(Article::UserId))
                    .col(timestamp_with_time_zone(Article::CreatedAt))
                    .col(timestamp_with_time_zone(Article::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Article::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_category_id")
                            .from(Article::Table, Article::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_user_id")
                            .from(Article::Table, Article::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_article_created_at")
                    .table(Article::Table)
                    .col(Article::CreatedAt)
                    .col(Article::Id)
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(manager, "article", "title").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Article::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Article {
    Table,
    Id,
    Title,
    Description,
    Content,
    Status,
    CategoryId,
    UserId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
