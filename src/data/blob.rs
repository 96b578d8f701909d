//! Content-addressed blob directory.
//!
//! Blobs live flat in one directory, named by the decimal form of their fingerprint with
//! no extension. Writes go to a temporary file first and are persisted into place only
//! when no blob with that name exists, so concurrent ingestion of identical bytes never
//! overwrites or truncates a blob another worker already published.

use std::{
    io::{self, ErrorKind, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{error::blob::BlobError, model::image::Fingerprint};

#[derive(Debug, Clone)]
pub struct BlobStore {
    dir: PathBuf,
}

impl BlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of the blob for a fingerprint, whether or not it exists.
    pub fn path_for(&self, fingerprint: Fingerprint) -> PathBuf {
        self.dir.join(fingerprint.to_string())
    }

    pub async fn exists(&self, fingerprint: Fingerprint) -> Result<bool, BlobError> {
        let path = self.path_for(fingerprint);
        tokio::fs::try_exists(&path)
            .await
            .map_err(|source| BlobError::Io { path, source })
    }

    /// Writes `bytes` under the fingerprint's name unless a blob is already there.
    ///
    /// # Arguments
    /// - `fingerprint` - Fingerprint of `bytes`
    /// - `bytes` - Blob content
    ///
    /// # Returns
    /// - `Ok(true)` - Blob was written by this call
    /// - `Ok(false)` - Blob already existed and was left untouched
    /// - `Err(BlobError::Io)` - Temporary write or persist failed
    pub async fn write_if_absent(
        &self,
        fingerprint: Fingerprint,
        bytes: &[u8],
    ) -> Result<bool, BlobError> {
        let dir = self.dir.clone();
        let target = self.path_for(fingerprint);
        let bytes = bytes.to_vec();

        let task_target = target.clone();
        tokio::task::spawn_blocking(move || persist_new(&dir, &task_target, &bytes))
            .await
            .map_err(|e| BlobError::Io {
                path: target,
                source: io::Error::other(e),
            })?
    }

    /// Removes the blob for a fingerprint.
    ///
    /// # Returns
    /// - `Ok(())` - Blob removed
    /// - `Err(BlobError::Missing)` - No blob under that name
    /// - `Err(BlobError::Io)` - Removal failed
    pub async fn remove(&self, fingerprint: Fingerprint) -> Result<(), BlobError> {
        let path = self.path_for(fingerprint);

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(BlobError::Missing { path }),
            Err(source) => Err(BlobError::Io { path, source }),
        }
    }
}

/// Writes `bytes` to a temp file in `dir` and links it to `target` unless `target` exists.
///
/// The temp file is deleted on every path that does not persist it.
fn persist_new(dir: &Path, target: &Path, bytes: &[u8]) -> Result<bool, BlobError> {
    let temp_io = |source| BlobError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(temp_io)?;
    temp.write_all(bytes).map_err(temp_io)?;
    temp.as_file().sync_all().map_err(temp_io)?;

    match temp.persist_noclobber(target) {
        Ok(_) => Ok(true),
        Err(e) if e.error.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(BlobError::Io {
            path: target.to_path_buf(),
            source: e.error,
        }),
    }
}
