use client_core::{ApiClientError, ApiErrorKind, ConfigError, CoreError};

use common::ErrorLocation;

use models::ModelError;

use std::io::Error as IoError;
use std::panic::Location;

use thiserror::Error;

const CONFIG_HINT: &str =
    "Check API_BASE_URL, API_TIMEOUT_SECS and API_RETRIES or the matching flags.";

/// Errors surfaced by the dashboard commands.
///
/// Failures from client-core keep their own location; everything raised here
/// records where the command gave up.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Error from this app
    #[error("Dashboard Error: {message} {location}")]
    Dashboard {
        message: String,
        location: ErrorLocation,
    },

    /// Reading a file or stdin failed
    #[error("Input Error: {message} {location}")]
    Input {
        message: String,
        location: ErrorLocation,
    },

    /// Writing results failed
    #[error("Output Error: {message} {location}")]
    Output {
        message: String,
        location: ErrorLocation,
    },

    /// Some of a batch of uploads failed
    #[error("Upload Error: {failed} of {total} uploads failed {location}")]
    UploadFailed {
        failed: usize,
        total: usize,
        location: ErrorLocation,
    },

    /// Error from client-core (API call, configuration, payload)
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl DashboardError {
    #[track_caller]
    pub fn dashboard(message: impl Into<String>) -> Self {
        DashboardError::Dashboard {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn input(message: impl Into<String>) -> Self {
        DashboardError::Input {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn upload_failed(failed: usize, total: usize) -> Self {
        DashboardError::UploadFailed {
            failed,
            total,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The message without the source location, for terminal output.
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::Dashboard { message, .. }
            | DashboardError::Input { message, .. }
            | DashboardError::Output { message, .. } => message.clone(),
            DashboardError::UploadFailed { failed, total, .. } => {
                format!("{failed} of {total} uploads failed")
            }
            DashboardError::Core(CoreError::ApiClient(e)) => match e.status_code() {
                Some(status) => format!("{} (HTTP {status})", e.message()),
                None => e.message().to_string(),
            },
            DashboardError::Core(other) => other.to_string(),
        }
    }

    /// Advice for the user, when there is something better to say than the message.
    pub fn user_hint(&self) -> Option<&'static str> {
        match self {
            DashboardError::Core(CoreError::ApiClient(e)) => Some(e.user_hint()),
            DashboardError::Core(CoreError::Config(_)) => Some(CONFIG_HINT),
            DashboardError::Core(CoreError::Model(_)) => {
                Some("The backend answered with an unexpected payload.")
            }
            DashboardError::UploadFailed { .. } => Some("See the per-file errors above."),
            _ => None,
        }
    }

    /// Process exit status for this error.
    ///
    /// 2 is left to clap for usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            DashboardError::Core(CoreError::ApiClient(e)) => match e.kind() {
                ApiErrorKind::Connection => 3,
                ApiErrorKind::Validation => 4,
                ApiErrorKind::Server => 5,
            },
            DashboardError::Core(CoreError::Config(_)) => 6,
            _ => 1,
        }
    }
}

impl From<ApiClientError> for DashboardError {
    fn from(error: ApiClientError) -> Self {
        DashboardError::Core(CoreError::from(error))
    }
}

impl From<ConfigError> for DashboardError {
    fn from(error: ConfigError) -> Self {
        DashboardError::Core(CoreError::from(error))
    }
}

impl From<ModelError> for DashboardError {
    fn from(error: ModelError) -> Self {
        DashboardError::Core(CoreError::from(error))
    }
}

impl From<IoError> for DashboardError {
    #[track_caller]
    fn from(error: IoError) -> Self {
        DashboardError::Output {
            message: format!("Failed to write output: {error}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
