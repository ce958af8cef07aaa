use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod review;
pub mod targets;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use review::{NormalizedReview, SellerResponse};
pub use targets::{load_targets, Target};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read targets file {path}: {source}")]
    TargetsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse targets file: {0}")]
    TargetsFileParse(#[from] csv::Error),

    #[error("configuration validation failed: {0}")]
    Validation(String),
}
