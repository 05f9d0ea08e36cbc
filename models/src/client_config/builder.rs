use crate::error::model_error::ModelError;
use crate::{ClientConfig, ErrorLocation};

use super::{DEFAULT_RETRIES, DEFAULT_RETRY_INITIAL_DELAY, DEFAULT_TIMEOUT};

use std::panic::Location;
use std::time::Duration;

use url::Url;

/// Builder for creating validated ClientConfig instances.
///
/// Only the base URL is required; timeout, retry count and the initial retry
/// delay fall back to 30s, 3 and 1s.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    retries: Option<u32>,
    retry_initial_delay: Option<Duration>,
}

impl ClientConfigBuilder {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }

    pub fn with_retry_initial_delay(mut self, delay: Duration) -> Self {
        self.retry_initial_delay = Some(delay);
        self
    }

    /// Build the ClientConfig with validation.
    #[track_caller]
    pub fn build(self) -> Result<ClientConfig, ModelError> {
        let raw_url = self.base_url.ok_or_else(|| ModelError::Validation {
            message: String::from("Base URL is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let base_url = raw_url.trim().trim_end_matches('/').to_string();

        if base_url.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Base URL cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let parsed = Url::parse(&base_url).map_err(|e| ModelError::Validation {
            message: format!("Invalid base URL '{base_url}': {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ModelError::Validation {
                message: format!("Invalid base URL format: {base_url}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        if timeout.is_zero() {
            return Err(ModelError::Validation {
                message: String::from("Timeout must be non-zero"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(ClientConfig {
            base_url,
            timeout,
            retries: self.retries.unwrap_or(DEFAULT_RETRIES),
            retry_initial_delay: self
                .retry_initial_delay
                .unwrap_or(DEFAULT_RETRY_INITIAL_DELAY),
        })
    }
}
