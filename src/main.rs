use cms::{config::Config, error::AppError, service::user::UserService, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::prepare_upload_dir(&config.upload_dir).await?;

    // Create the initial super user on first start
    UserService::new(&db)
        .ensure_super_user(&config.init_admin_user, &config.init_admin_password)
        .await?;

    tracing::info!(
        upload_dir = %config.upload_dir.display(),
        "Data layer ready"
    );

    Ok(())
}
