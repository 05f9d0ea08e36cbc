use std::path::PathBuf;

use common::ErrorLocation;
use models::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config Env Parse Error: {key}={value:?}: {reason} {location}")]
    EnvParseError {
        location: ErrorLocation,
        key: String,
        value: String,
        reason: String,
    },

    #[error("Config Env File Error: {path}: {reason} {location}")]
    EnvFileError {
        location: ErrorLocation,
        path: PathBuf,
        reason: String,
    },

    #[error("Config Validation Error: {source} {location}")]
    ValidationError {
        location: ErrorLocation,
        #[source]
        source: ModelError,
    },
}
