use thiserror::Error;

/// Startup configuration errors, raised before any storage is touched.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Variable is set but its value cannot be used, e.g. blank credentials.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar { name: String, reason: String },
}
