//! Category domain models and parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Article category with a unique name and a unique URL-safe alias.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    /// URL-safe slug, unique among live categories.
    pub alias: String,
    pub description: String,
    /// Higher values are listed first.
    pub sort: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Converts an entity model to a category domain model at the repository boundary.
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            alias: entity.alias,
            description: entity.description,
            sort: entity.sort,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for creating a category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCategoryParams {
    pub name: String,
    pub alias: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sort: i32,
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategoryParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sort: Option<i32>,
}
