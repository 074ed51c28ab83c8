pub mod app_config;
pub mod business;
pub mod config;
pub mod export;

pub use app_config::{AppConfig, Environment};
pub use business::{Business, CoreError, Region, SearchQuery, MIN_KEYWORD_CHARS};
pub use config::{load_app_config, load_app_config_from_env};
pub use export::{to_contacts_json, to_csv, CSV_HEADER};

use thiserror::Error;

/// Every variable has a default, so only present-but-unparseable values fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
