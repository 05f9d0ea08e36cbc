pub mod builder;

use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_INITIAL_DELAY: Duration = Duration::from_secs(1);

/// Validated, immutable settings for the backend API client.
///
/// Only constructible through [`builder::ClientConfigBuilder`], which guarantees a
/// non-empty absolute `http(s)` base URL without trailing slashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
    pub(crate) retries: u32,
    pub(crate) retry_initial_delay: Duration,
}

impl ClientConfig {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    pub fn retry_initial_delay(&self) -> Duration {
        self.retry_initial_delay
    }

    /// `{base_url}/{path}` with exactly one slash between the two.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
