mod app_config;
mod config;
pub mod geo;
pub mod search;
pub mod stores;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use search::{search_stores, SearchError, StoreMatch, StoreQuery, StoreSearchRequest};
pub use stores::Store;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
