use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_UPLOAD_DIR: &str = "uploads";

pub struct Config {
    pub database_url: String,

    /// Directory holding content-addressed image blobs.
    pub upload_dir: PathBuf,

    /// Credentials for the super user created on first start.
    pub init_admin_user: String,
    pub init_admin_password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let upload_dir = match std::env::var("UPLOAD_DIR") {
            Ok(dir) => non_blank("UPLOAD_DIR", dir)?,
            Err(_) => DEFAULT_UPLOAD_DIR.to_string(),
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            upload_dir: PathBuf::from(upload_dir),
            init_admin_user: required("INIT_ADMIN_USER")?,
            init_admin_password: required("INIT_ADMIN_PASSWORD")?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    let value =
        std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))?;

    non_blank(name, value)
}

fn non_blank(name: &str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: "value is blank".to_string(),
        });
    }

    Ok(value)
}
