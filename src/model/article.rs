//! Article domain models, parameters and list filters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication state of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Draft,
    Published,
}

impl From<entity::sea_orm_active_enums::ArticleStatus> for ArticleStatus {
    fn from(status: entity::sea_orm_active_enums::ArticleStatus) -> Self {
        match status {
            entity::sea_orm_active_enums::ArticleStatus::Draft => Self::Draft,
            entity::sea_orm_active_enums::ArticleStatus::Published => Self::Published,
        }
    }
}

impl From<ArticleStatus> for entity::sea_orm_active_enums::ArticleStatus {
    fn from(status: ArticleStatus) -> Self {
        match status {
            ArticleStatus::Draft => Self::Draft,
            ArticleStatus::Published => Self::Published,
        }
    }
}

/// Article attributes without its edges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub content: String,
    pub status: ArticleStatus,
    pub category_id: i32,
    /// Owning (authoring) user.
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Converts an entity model to an article domain model at the repository boundary.
    pub fn from_entity(entity: entity::article::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            content: entity.content,
            status: entity.status.into(),
            category_id: entity.category_id,
            user_id: entity.user_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Article together with the IDs on its image and tag edges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleWithRelations {
    pub article: Article,
    /// Ascending image IDs.
    pub image_ids: Vec<i32>,
    /// Ascending tag IDs.
    pub tag_ids: Vec<i32>,
}

/// Parameters for creating an article.
///
/// Image and tag IDs that do not resolve to a live row are dropped, not rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArticleParams {
    pub title: String,
    pub description: String,
    pub content: String,
    pub category_id: i32,
    pub status: ArticleStatus,
    #[serde(default)]
    pub image_ids: Vec<i32>,
    #[serde(default)]
    pub tag_ids: Vec<i32>,
}

/// Partial article update.
///
/// For `image_ids` and `tag_ids`, `None` leaves the edge set untouched while
/// `Some(vec![])` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateArticleParams {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category_id: Option<i32>,
    #[serde(default)]
    pub status: Option<ArticleStatus>,
    #[serde(default)]
    pub image_ids: Option<Vec<i32>>,
    #[serde(default)]
    pub tag_ids: Option<Vec<i32>>,
}

/// Optional list filters; an absent filter imposes no constraint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleFilter {
    /// Case-insensitive substring of the title.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category_id: Option<i32>,
    #[serde(default)]
    pub status: Option<ArticleStatus>,
}
