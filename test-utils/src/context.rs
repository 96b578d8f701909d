use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::path::Path;
use tempfile::TempDir;

use crate::error::TestError;

/// Test context containing the database connection and blob directory.
///
/// Provides an in-memory SQLite database connection and an optional temporary directory for
/// isolated unit and integration testing. Both are created lazily on first access and live
/// for the lifetime of the test context.
pub struct TestContext {
    /// Optional database connection to in-memory SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called.
    pub db: Option<DatabaseConnection>,

    /// Optional temporary directory used as the blob store root.
    ///
    /// Deleted from disk when the context is dropped.
    pub blob_dir: Option<TempDir>,
}

impl TestContext {
    /// Creates a new empty test context.
    ///
    /// # Returns
    /// - New `TestContext` instance with no database connection
    pub fn new() -> Self {
        Self {
            db: None,
            blob_dir: None,
        }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref) // Re-borrow as immutable
            }
        }
    }

    /// Applies all migrations to the test database.
    ///
    /// Typically called internally by `TestBuilder::build()` rather than directly.
    ///
    /// # Returns
    /// - `Ok(())` - Schema created successfully
    /// - `Err(TestError::Database)` - Failed to connect or a migration failed
    pub async fn with_schema(&mut self) -> Result<(), TestError> {
        let db = self.database().await?;

        Migrator::up(db, None).await?;

        Ok(())
    }

    /// Gets or creates the temporary blob directory.
    ///
    /// # Returns
    /// - `Ok(&Path)` - Path of the temporary directory
    /// - `Err(TestError::Io)` - Failed to create the directory
    pub fn blob_dir(&mut self) -> Result<&Path, TestError> {
        match self.blob_dir {
            Some(ref dir) => Ok(dir.path()),
            None => {
                let dir = tempfile::tempdir()?;

                Ok(self.blob_dir.insert(dir).path())
            }
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
