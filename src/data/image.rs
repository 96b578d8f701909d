use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, QueryFilter, QueryOrder,
};

use crate::{
    data::live::{self, Live},
    model::image::{Fingerprint, Image},
};

/// Image catalog rows. Blobs are handled by `BlobStore`.
pub struct ImageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ImageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a new fingerprint in the catalog.
    ///
    /// # Arguments
    /// - `title` - Display title, usually the upload's file name
    /// - `fingerprint` - Content fingerprint of the blob
    ///
    /// # Returns
    /// - `Ok(Image)` - Created catalog record
    /// - `Err(DbErr)` - Insert failed; a live row with the same fingerprint surfaces as a
    ///   unique constraint violation
    pub async fn create(&self, title: String, fingerprint: Fingerprint) -> Result<Image, DbErr> {
        let now = Utc::now();
        let image = entity::image::ActiveModel {
            title: ActiveValue::Set(title),
            hash: ActiveValue::Set(fingerprint.to_column()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Image::from_entity(image))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Image>, DbErr> {
        let image = entity::prelude::Image::find_live_by_id(id)
            .one(self.db)
            .await?;

        Ok(image.map(Image::from_entity))
    }

    /// Gets the live catalog record for a fingerprint
    pub async fn get_by_fingerprint(
        &self,
        fingerprint: Fingerprint,
    ) -> Result<Option<Image>, DbErr> {
        let image = entity::prelude::Image::find_live()
            .filter(entity::image::Column::Hash.eq(fingerprint.to_column()))
            .one(self.db)
            .await?;

        Ok(image.map(Image::from_entity))
    }

    /// Gets all live images, newest first
    pub async fn get_all(&self) -> Result<Vec<Image>, DbErr> {
        let images = entity::prelude::Image::find_live()
            .order_by_desc(entity::image::Column::CreatedAt)
            .order_by_desc(entity::image::Column::Id)
            .all(self.db)
            .await?;

        Ok(images.into_iter().map(Image::from_entity).collect())
    }

    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        live::tombstone::<entity::image::Entity, C>(self.db, id).await
    }
}
