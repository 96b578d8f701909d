use std::path::Path;

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    error::{blob::BlobError, AppError},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema (tables, foreign keys and live-row unique indexes) is up-to-date. This function must
/// complete successfully before any repository can be used.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the blob directory if it does not exist yet.
///
/// # Arguments
/// - `dir` - Upload directory from configuration
///
/// # Returns
/// - `Ok(())` - Directory exists
/// - `Err(AppError::BlobErr)` - Directory could not be created
pub async fn prepare_upload_dir(dir: &Path) -> Result<(), AppError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| BlobError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

    Ok(())
}
