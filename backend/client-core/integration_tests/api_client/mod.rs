mod concurrency;
mod health;
mod process_text;
mod retry;
mod upload;

use client_core::ApiClient;

use models::ClientConfigBuilder;

use std::time::Duration;

use wiremock::MockServer;

pub(crate) const API_PREFIX: &str = "/api";
pub(crate) const TEST_RETRY_DELAY: Duration = Duration::from_millis(10);

/// Client pointed at `{server}/api` with short retry delays.
pub(crate) fn client_for(server: &MockServer, retries: u32) -> ApiClient {
    let config = ClientConfigBuilder::default()
        .with_base_url(format!("{}{API_PREFIX}/", server.uri()))
        .with_timeout(Duration::from_secs(5))
        .with_retries(retries)
        .with_retry_initial_delay(TEST_RETRY_DELAY)
        .build()
        .expect("valid test config");

    ApiClient::new(config).expect("client builds")
}

pub(crate) fn api_path(endpoint: &str) -> String {
    format!("{API_PREFIX}/{endpoint}")
}
