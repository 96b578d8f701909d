use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts.
///
/// Provides a fluent interface for configuring test environments with an in-memory SQLite
/// database. Call `with_schema()` to apply the application's migrations (tables, foreign keys
/// and live-row unique indexes) and `with_blob_dir()` to allocate a temporary directory for
/// content-addressed blobs, then call `build()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_schema()
///     .with_blob_dir()
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// Whether to run the migrator against the test database.
    schema: bool,
    /// Whether to allocate a temporary blob directory.
    blob_dir: bool,
}

impl TestBuilder {
    /// Creates a new test builder with nothing configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies every migration to the test database during `build()`.
    ///
    /// Running the real migrator rather than deriving tables from entities keeps the
    /// partial unique indexes and foreign keys identical to production.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_schema(mut self) -> Self {
        self.schema = true;
        self
    }

    /// Allocates a temporary directory for blob storage during `build()`.
    ///
    /// The directory is removed when the resulting `TestContext` is dropped.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_blob_dir(mut self) -> Self {
        self.blob_dir = true;
        self
    }

    /// Builds and initializes the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::Database)` - Failed to connect to database or run migrations
    /// - `Err(TestError::Io)` - Failed to create the temporary blob directory
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        if self.schema {
            setup.with_schema().await?;
        } else {
            setup.database().await?;
        }

        if self.blob_dir {
            setup.blob_dir()?;
        }

        Ok(setup)
    }
}
