use crate::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Payload Error: {message} {location}")]
    Payload {
        message: String,
        location: ErrorLocation,
    },
}

impl From<serde_json::Error> for ModelError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ModelError::Payload {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
