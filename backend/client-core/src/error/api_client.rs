//! Error types for backend API calls.
//!
//! Every failure of a logical call lands in exactly one of three categories:
//! - `Connection`: no HTTP response (DNS, refused, TLS, timeout)
//! - `Validation`: HTTP 4xx, or input rejected before any request was sent
//! - `Server`: HTTP 5xx, any other non-2xx status, or an unreadable 2xx body
//!
//! Status codes are stored directly, never parsed back out of messages.

use common::{ErrorLocation, HttpStatusCode};

use std::fmt;
use std::panic::Location;

use serde_json::Value;
use thiserror::Error as ThisError;

const ERROR_BODY_FIELD: &str = "error";

#[derive(Debug, ThisError)]
pub enum ApiClientError {
    #[error("Connection Error: {message} {location}")]
    Connection {
        message: String,
        is_timeout: bool,
        location: ErrorLocation,
    },

    #[error("Validation Error{}: {message} {location}", status_suffix(.status_code))]
    Validation {
        message: String,
        status_code: Option<HttpStatusCode>,
        location: ErrorLocation,
    },

    #[error("Server Error{}: {message} {location}", status_suffix(.status_code))]
    Server {
        message: String,
        status_code: Option<HttpStatusCode>,
        location: ErrorLocation,
    },
}

fn status_suffix(status_code: &Option<HttpStatusCode>) -> String {
    match status_code {
        Some(code) => format!(" ({code})"),
        None => String::new(),
    }
}

/// Category of an [`ApiClientError`], for callers that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Connection,
    Validation,
    Server,
}

impl ApiErrorKind {
    /// Short advice suitable for showing to an end user.
    pub fn user_hint(&self) -> &'static str {
        match self {
            ApiErrorKind::Connection => {
                "API unavailable. Check your connection and that the backend is running."
            }
            ApiErrorKind::Validation => "The request was rejected. Check the input and try again.",
            ApiErrorKind::Server => "The server had a problem. Try again later.",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Connection => write!(f, "connection"),
            ApiErrorKind::Validation => write!(f, "validation"),
            ApiErrorKind::Server => write!(f, "server"),
        }
    }
}

impl ApiClientError {
    #[track_caller]
    pub fn connection(message: impl Into<String>, is_timeout: bool) -> Self {
        ApiClientError::Connection {
            message: message.into(),
            is_timeout,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Input rejected locally, before any request was issued.
    #[track_caller]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiClientError::Validation {
            message: message.into(),
            status_code: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn server(message: impl Into<String>, status_code: Option<HttpStatusCode>) -> Self {
        ApiClientError::Server {
            message: message.into(),
            status_code,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Classify a non-2xx response.
    ///
    /// The message is the body's `error` field when the body is a JSON object
    /// carrying one, otherwise the raw body text.
    #[track_caller]
    pub fn from_http_response(status_code: HttpStatusCode, body: &str) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let message = extract_error_message(body);

        if status_code.is_client_error() {
            ApiClientError::Validation {
                message,
                status_code: Some(status_code),
                location,
            }
        } else if status_code.is_server_error() {
            ApiClientError::Server {
                message,
                status_code: Some(status_code),
                location,
            }
        } else {
            ApiClientError::Server {
                message: format!("Unexpected status {status_code}: {message}"),
                status_code: Some(status_code),
                location,
            }
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiClientError::Connection { .. } => ApiErrorKind::Connection,
            ApiClientError::Validation { .. } => ApiErrorKind::Validation,
            ApiClientError::Server { .. } => ApiErrorKind::Server,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiClientError::Connection { message, .. }
            | ApiClientError::Validation { message, .. }
            | ApiClientError::Server { message, .. } => message,
        }
    }

    pub fn status_code(&self) -> Option<HttpStatusCode> {
        match self {
            ApiClientError::Connection { .. } => None,
            ApiClientError::Validation { status_code, .. }
            | ApiClientError::Server { status_code, .. } => *status_code,
        }
    }

    pub fn location(&self) -> ErrorLocation {
        match self {
            ApiClientError::Connection { location, .. }
            | ApiClientError::Validation { location, .. }
            | ApiClientError::Server { location, .. } => *location,
        }
    }

    /// Whether re-issuing the same call later may succeed.
    ///
    /// Connection failures always qualify; server errors only for transient codes.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiClientError::Connection { .. } => true,
            ApiClientError::Validation { .. } => false,
            ApiClientError::Server { status_code, .. } => {
                status_code.is_some_and(|code| code.is_transient())
            }
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiClientError::Connection { is_timeout: true, .. })
    }

    pub fn user_hint(&self) -> &'static str {
        self.kind().user_hint()
    }
}

impl From<reqwest::Error> for ApiClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ApiClientError::Connection {
            message: format!("Failed to connect to the API: {error}"),
            is_timeout: error.is_timeout(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get(ERROR_BODY_FIELD) {
            Some(Value::String(message)) => message.clone(),
            Some(Value::Null) | None => body.to_string(),
            Some(other) => other.to_string(),
        },
        _ => body.to_string(),
    }
}
