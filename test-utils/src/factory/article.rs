//! Article factory for creating test article entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ArticleStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test articles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let article = ArticleFactory::new(&db, category.id, user.id)
///     .title("Release notes")
///     .status(ArticleStatus::Published)
///     .build()
///     .await?;
/// ```
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    status: ArticleStatus,
    category_id: i32,
    user_id: i32,
    created_at: DateTime<Utc>,
}

impl<'a> ArticleFactory<'a> {
    /// Creates a new ArticleFactory for the given category and owning user.
    ///
    /// Defaults:
    /// - title: `"Article {id}"`
    /// - status: `Draft`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, category_id: i32, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Article {}", id),
            status: ArticleStatus::Draft,
            category_id,
            user_id,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    /// Overrides the creation timestamp, useful for asserting list ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the article entity into the database.
    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        entity::article::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set("A short summary".to_string()),
            content: ActiveValue::Set("Body text".to_string()),
            status: ActiveValue::Set(self.status),
            category_id: ActiveValue::Set(self.category_id),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a draft article with default values.
pub async fn create_article(
    db: &DatabaseConnection,
    category_id: i32,
    user_id: i32,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, category_id, user_id).build().await
}
