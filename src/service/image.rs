//! Content-addressed image ingestion.
//!
//! An upload is fingerprinted with xxHash64. If a live catalog record already carries that
//! fingerprint the upload resolves to it and nothing is written. Otherwise the bytes are
//! written to the blob directory under the fingerprint's decimal name (write-if-absent)
//! and a catalog record is created.

use std::path::PathBuf;

use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};

use crate::{
    data::{
        blob::BlobStore,
        image::ImageRepository,
        integrity::{DeleteVerdict, EntityKind, IntegrityGuard},
    },
    error::{blob::BlobError, AppError},
    model::image::{Fingerprint, Image, IngestOutcome, Upload},
    service::integrity_violation,
};

pub struct ImageService<'a> {
    db: &'a DatabaseConnection,
    blobs: &'a BlobStore,
}

impl<'a> ImageService<'a> {
    pub fn new(db: &'a DatabaseConnection, blobs: &'a BlobStore) -> Self {
        Self { db, blobs }
    }

    /// Gets all live images, newest first
    pub async fn list(&self) -> Result<Vec<Image>, AppError> {
        Ok(ImageRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Image, AppError> {
        ImageRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Image {} not found", id)))
    }

    pub async fn get_by_fingerprint(&self, fingerprint: Fingerprint) -> Result<Image, AppError> {
        ImageRepository::new(self.db)
            .get_by_fingerprint(fingerprint)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Image with fingerprint {} not found", fingerprint))
            })
    }

    /// Location of an image's blob, for serving downloads.
    pub fn blob_path(&self, image: &Image) -> PathBuf {
        self.blobs.path_for(image.fingerprint)
    }

    /// Stores an upload at most once and returns its catalog record.
    ///
    /// Ingesting identical bytes any number of times yields one blob and one record; every
    /// call after the first returns `is_new = false` with the same record, restoring the
    /// blob if it has gone missing. When two workers
    /// race on the same new content, the loser's insert hits the live-row unique index and
    /// resolves to the winner's record.
    ///
    /// # Arguments
    /// - `upload` - File name, declared media type and bytes
    ///
    /// # Returns
    /// - `Ok(IngestOutcome)` - Catalog record and whether this call created it
    /// - `Err(AppError::BlobErr)` - Blob could not be written
    /// - `Err(AppError::DbErr)` - Catalog lookup or insert failed
    pub async fn ingest(&self, upload: Upload) -> Result<IngestOutcome, AppError> {
        let fingerprint = Fingerprint::of(&upload.bytes);
        let repo = ImageRepository::new(self.db);

        if let Some(image) = repo.get_by_fingerprint(fingerprint).await? {
            tracing::debug!(id = image.id, %fingerprint, "Upload matches existing image");
            if !self.blobs.exists(fingerprint).await? {
                self.blobs.write_if_absent(fingerprint, &upload.bytes).await?;
                tracing::warn!(id = image.id, %fingerprint, "Restored missing image blob");
            }
            return Ok(IngestOutcome {
                image,
                is_new: false,
            });
        }

        let written = self
            .blobs
            .write_if_absent(fingerprint, &upload.bytes)
            .await?;

        let title = if upload.file_name.trim().is_empty() {
            fingerprint.to_string()
        } else {
            upload.file_name
        };

        match repo.create(title, fingerprint).await {
            Ok(image) => {
                tracing::info!(id = image.id, %fingerprint, written, "Stored new image");
                Ok(IngestOutcome {
                    image,
                    is_new: true,
                })
            }
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                let image = repo.get_by_fingerprint(fingerprint).await?.ok_or_else(|| {
                    AppError::InternalError(format!(
                        "Image with fingerprint {} rejected as duplicate but not found",
                        fingerprint
                    ))
                })?;
                tracing::debug!(
                    id = image.id,
                    %fingerprint,
                    "Lost ingest race to concurrent upload"
                );
                Ok(IngestOutcome {
                    image,
                    is_new: false,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Ingests each upload independently, skipping non-image media types.
    ///
    /// Skipped uploads are omitted from the result rather than reported as errors.
    pub async fn ingest_batch(
        &self,
        uploads: Vec<Upload>,
    ) -> Result<Vec<IngestOutcome>, AppError> {
        let mut outcomes = Vec::with_capacity(uploads.len());

        for upload in uploads {
            if !upload.is_image() {
                tracing::debug!(
                    file_name = %upload.file_name,
                    content_type = %upload.content_type,
                    "Skipping non-image upload"
                );
                continue;
            }

            outcomes.push(self.ingest(upload).await?);
        }

        Ok(outcomes)
    }

    /// Deletes an image record and its blob.
    ///
    /// The guard check, the tombstone and the blob removal run inside one transaction. A
    /// blob that is already gone counts as removed, so a delete whose commit failed after
    /// the blob was removed can be retried. Any other removal failure leaves the
    /// transaction uncommitted, so the record stays live and the error is returned.
    ///
    /// # Returns
    /// - `Ok(())` - Record tombstoned and blob removed
    /// - `Err(AppError::NotFound)` - No live image with that ID
    /// - `Err(AppError::ReferentialIntegrity)` - An article, user or dict still uses it
    /// - `Err(AppError::BlobErr)` - Blob removal failed
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = ImageRepository::new(&txn);

        let image = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Image {} not found", id)))?;

        if let DeleteVerdict::Blocked(relation) = IntegrityGuard::new(&txn)
            .can_delete(EntityKind::Image, id)
            .await?
        {
            return Err(integrity_violation(EntityKind::Image, id, relation));
        }

        repo.soft_delete(id).await?;

        match self.blobs.remove(image.fingerprint).await {
            Ok(()) => {}
            Err(BlobError::Missing { path }) => {
                tracing::warn!(
                    id,
                    path = %path.display(),
                    "Image blob already gone, deleting record only"
                );
            }
            Err(e) => {
                tracing::error!(
                    id,
                    fingerprint = %image.fingerprint,
                    error = %e,
                    "Failed to remove image blob"
                );
                return Err(e.into());
            }
        }

        txn.commit().await?;

        tracing::info!(id, fingerprint = %image.fingerprint, "Deleted image");

        Ok(())
    }
}
