//! Error types for the content-management data layer.
//!
//! `AppError` is the error returned by every service operation. It wraps the lower-level
//! errors (`DbErr`, `BlobError`, `ConfigError`) and adds the domain outcomes the data layer
//! decides on itself: missing entities, uniqueness conflicts, integrity vetoes and invalid
//! input. The routing layer maps `AppError::kind()` onto transport status codes; nothing
//! here knows about HTTP.

pub mod blob;
pub mod config;

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::error::{blob::BlobError, config::ConfigError};

/// Coarse error classification handed to the routing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    ReferentialIntegrityViolation,
    ValidationFailed,
    StorageFailure,
}

/// Top-level application error type.
///
/// Most infrastructure variants use `#[from]` for automatic conversion with `?`. Domain
/// variants carry a human-readable message describing which entity or field is involved.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Unique constraint violations raised by the store are not kept here; see the
    /// `From<DbErr>` implementation, which turns them into `Conflict`.
    #[error(transparent)]
    DbErr(DbErr),

    /// Blob directory error from the content-addressed store.
    #[error(transparent)]
    BlobErr(#[from] BlobError),

    /// Password hashing primitive failed (not a wrong password).
    #[error("Password hashing failed: {0}")]
    PasswordErr(String),

    /// Referenced entity does not exist or is tombstoned.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation on a live row.
    ///
    /// # Fields
    /// - Message naming the conflicting field and value
    #[error("{0}")]
    Conflict(String),

    /// Deletion vetoed because another live row still references the entity.
    #[error("Cannot delete {entity} {id}: still referenced by {relation}")]
    ReferentialIntegrity {
        /// Kind of entity whose deletion was attempted
        entity: &'static str,
        /// ID of the entity whose deletion was attempted
        id: i32,
        /// Relation that blocked the deletion
        relation: String,
    },

    /// Structurally invalid input, rejected before any storage access.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    Validation(String),

    /// Internal error with custom message.
    ///
    /// Indicates behaviour that should not happen with a consistent database.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Collapses the error into the kind the routing layer maps to a status code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::ReferentialIntegrity { .. } => ErrorKind::ReferentialIntegrityViolation,
            Self::Validation(_) => ErrorKind::ValidationFailed,
            Self::ConfigErr(_)
            | Self::DbErr(_)
            | Self::BlobErr(_)
            | Self::PasswordErr(_)
            | Self::InternalError(_) => ErrorKind::StorageFailure,
        }
    }
}

/// Converts SeaORM errors, surfacing unique index violations as `Conflict`.
///
/// The application checks uniqueness before writing, but two concurrent writers can both
/// pass that check; the live-row unique indexes then reject the second insert and the
/// caller still sees a conflict rather than a storage failure.
impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => AppError::Conflict(msg),
            _ => AppError::DbErr(err),
        }
    }
}
