use std::path::PathBuf;
use thiserror::Error;

/// Failures of the content-addressed blob directory.
#[derive(Error, Debug)]
pub enum BlobError {
    /// A blob expected to exist for a catalog record is not on disk.
    ///
    /// Means the image catalog and the blob directory disagree, so it is never
    /// treated as a successful no-op removal.
    #[error("Blob {path} is missing from the upload directory")]
    Missing { path: PathBuf },

    /// Any other filesystem failure while reading, writing or removing a blob.
    #[error("Blob I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
