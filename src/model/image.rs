//! Image catalog models and content fingerprints.
//!
//! Images are content-addressed: the catalog row and the blob on disk are both keyed by
//! a 64-bit xxHash of the uploaded bytes, so identical uploads resolve to one record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// 64-bit content fingerprint of an image's bytes.
///
/// Not a security control; it is the deduplication key and the blob file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Fingerprint(pub u64);

impl Fingerprint {
    /// Computes the fingerprint of a byte buffer.
    pub fn of(bytes: &[u8]) -> Self {
        Self(xxhash_rust::xxh64::xxh64(bytes, 0))
    }

    /// Reinterprets the stored signed column value as a fingerprint.
    ///
    /// SQLite has no unsigned 64-bit integer, so the bits are stored in an `i64`.
    pub fn from_column(value: i64) -> Self {
        Self(value as u64)
    }

    pub fn to_column(self) -> i64 {
        self.0 as i64
    }
}

/// Decimal form, used as the blob file name.
impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Image catalog record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    pub id: i32,
    /// Display title, usually the original upload file name.
    pub title: String,
    pub fingerprint: Fingerprint,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Image {
    pub fn from_entity(entity: entity::image::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            fingerprint: Fingerprint::from_column(entity.hash),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// A single uploaded file handed over by the transport layer.
#[derive(Debug, Clone)]
pub struct Upload {
    /// Original file name, kept as the image title.
    pub file_name: String,
    /// Declared media type, e.g. `image/png`.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Whether the declared media type is an image type.
    pub fn is_image(&self) -> bool {
        self.content_type
            .trim()
            .to_ascii_lowercase()
            .starts_with("image/")
    }
}

/// Result of ingesting one upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestOutcome {
    pub image: Image,
    /// `false` when the fingerprint was already catalogued and nothing was written.
    pub is_new: bool,
}
