//! Hierarchical dictionary models.
//!
//! Dicts form a tree through a nullable parent reference and may point at one image.
//! The `extra` payload is free-form text the caller interprets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::deserialize_present;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dict {
    pub id: i32,
    pub name: String,
    /// Lookup code, unique among live dicts.
    pub code: String,
    pub extra: String,
    pub description: String,
    pub parent_id: Option<i32>,
    pub image_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Dict {
    pub fn from_entity(entity: entity::dict::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            code: entity.code,
            extra: entity.extra,
            description: entity.description,
            parent_id: entity.parent_id,
            image_id: entity.image_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for creating a dict. Parent and image, when given, must be live.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateDictParams {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub extra: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parent_id: Option<i32>,
    #[serde(default)]
    pub image_id: Option<i32>,
}

/// Partial dict update.
///
/// `parent_id` and `image_id` are tri-state: absent leaves the reference alone,
/// `Some(None)` detaches it and `Some(Some(id))` moves it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDictParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub extra: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub parent_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub image_id: Option<Option<i32>>,
}

/// Children of a dict resolved by code.
///
/// An unknown code is reported as an error instead, so callers can tell "no such
/// dict" apart from "dict without children".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SubDicts {
    Found(Vec<Dict>),
    NoChildren,
}
