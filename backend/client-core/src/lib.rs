pub mod api_client;
pub mod config;
pub mod error;
pub mod history;
pub mod tasks;

#[cfg(test)]
mod tests;

pub use api_client::ApiClient;
pub use config::AppConfig;
pub use error::{ApiClientError, ApiErrorKind, ConfigError, CoreError};
pub use history::{HistoryEntry, SessionHistory};

pub const DEFAULT_API_HOSTNAME: &str = "127.0.0.1";
pub const DEFAULT_API_PORT: u16 = 3000;
pub const DEFAULT_API_BASE_URL: &str =
    const_format::concatcp!("http://", DEFAULT_API_HOSTNAME, ":", DEFAULT_API_PORT, "/api");
