pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_image_table;
mod m20250301_000002_create_user_table;
mod m20250301_000003_create_category_table;
mod m20250301_000004_create_tag_table;
mod m20250301_000005_create_article_table;
mod m20250301_000006_create_article_images_table;
mod m20250301_000007_create_article_tags_table;
mod m20250301_000008_create_dict_table;
mod util;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_image_table::Migration),
            Box::new(m20250301_000002_create_user_table::Migration),
            Box::new(m20250301_000003_create_category_table::Migration),
            Box::new(m20250301_000004_create_tag_table::Migration),
            Box::new(m20250301_000005_create_article_table::Migration),
            Box::new(m20250301_000006_create_article_images_table::Migration),
            Box::new(m20250301_000007_create_article_tags_table::Migration),
            Box::new(m20250301_000008_create_dict_table::Migration),
        ]
    }
}
