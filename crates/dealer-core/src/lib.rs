//! Shared configuration and review types for the dealer review services.

mod app_config;
mod config;
mod reviews;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use reviews::{DealerReview, SentimentLabel};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
