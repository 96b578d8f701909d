use thiserror::Error;

/// Errors raised while preparing a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or apply migrations.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Failed to create the temporary blob directory.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
