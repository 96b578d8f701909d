//! User domain models and parameters.
//!
//! The password hash never leaves the data layer inside `User`; only authentication
//! reads it, through `UserCredentials`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::deserialize_present;

/// Back-office user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i32,
    pub nickname: String,
    /// Unique among live users.
    pub phone: String,
    /// Unique among live users.
    pub username: String,
    /// Whether the user has super privileges.
    pub is_super: bool,
    /// Avatar image.
    pub image_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model without its password hash
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            nickname: entity.nickname,
            phone: entity.phone,
            username: entity.username,
            is_super: entity.is_super,
            image_id: entity.image_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// User plus stored password hash, used only to authenticate.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();
        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Parameters for creating a user. `password` is plaintext and hashed by the service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserParams {
    pub nickname: String,
    pub phone: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub is_super: bool,
    #[serde(default)]
    pub image_id: Option<i32>,
}

/// Partial user update; `image_id` is tri-state like dict references.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserParams {
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub is_super: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub image_id: Option<Option<i32>>,
}

/// Fields written to the user table on insert, after hashing.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub nickname: String,
    pub phone: String,
    pub username: String,
    pub password_hash: String,
    pub is_super: bool,
}
