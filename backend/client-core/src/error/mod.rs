pub mod api_client;
pub mod config;

pub use api_client::{ApiClientError, ApiErrorKind};
pub use config::ConfigError;

use models::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    ApiClient(#[from] ApiClientError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Model(#[from] ModelError),
}
