//! Image factory for creating test image catalog entities.
//!
//! Only the catalog row is inserted; no blob is written to disk. Tests that need the
//! blob to exist should go through the image service's ingest path instead.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test image records with customizable fields.
pub struct ImageFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    hash: i64,
}

impl<'a> ImageFactory<'a> {
    /// Creates a new ImageFactory with title `"image_{id}.png"` and a unique hash.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("image_{}.png", id),
            hash: id as i64,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the stored fingerprint column directly.
    pub fn hash(mut self, hash: i64) -> Self {
        self.hash = hash;
        self
    }

    /// Builds and inserts the image entity into the database.
    pub async fn build(self) -> Result<entity::image::Model, DbErr> {
        let now = Utc::now();
        entity::image::ActiveModel {
            title: ActiveValue::Set(self.title),
            hash: ActiveValue::Set(self.hash),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an image record with default values.
pub async fn create_image(db: &DatabaseConnection) -> Result<entity::image::Model, DbErr> {
    ImageFactory::new(db).build().await
}
