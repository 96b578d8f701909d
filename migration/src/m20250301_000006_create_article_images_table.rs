use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_image_table::Image, m20250301_000005_create_article_table::Article,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArticleImages::Table)
                    .if_not_exists()
                    .col(integer(ArticleImages::ArticleId))
                    .col(integer(ArticleImages::ImageId))
                    .primary_key(
                        Index::create()
                            .col(ArticleImages::ArticleId)
                            .col(ArticleImages::ImageId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_images_article_id")
                            .from(ArticleImages::Table, ArticleImages::ArticleId)
                            .to(Article::Table, Article::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_images_image_id")
                            .from(ArticleImages::Table, ArticleImages::ImageId)
                            .to(Image::Table, Image::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArticleImages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArticleImages {
    Table,
    ArticleId,
    ImageId,
}
