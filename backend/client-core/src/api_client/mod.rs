pub mod response;
pub mod retry;

use crate::error::api_client::ApiClientError;

use response::handle_response;
use retry::{RetryPolicy, retry_after, should_retry};

use models::{ClientConfig, HealthStatus, ProcessingResult};

use log::{debug, error, info, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use tokio::time::sleep as TokioSleep;

const HEALTH_ENDPOINT: &str = "health";
const UPLOAD_ENDPOINT: &str = "upload";
const PROCESS_TEXT_ENDPOINT: &str = "process-text";
const UPLOAD_FIELD_NAME: &str = "file";
const EMPTY_TEXT_MESSAGE: &str = "Text content cannot be empty.";

#[derive(Debug, Serialize)]
struct ProcessTextBody<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

/// Client for the task-extraction backend.
///
/// Holds one connection pool for its whole lifetime. Cloning is cheap and clones
/// share the pool, so concurrent calls from several tasks are fine.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ClientConfig,
    client: Client,
    retry: RetryPolicy,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiClientError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        let retry = RetryPolicy::new(config.retries(), config.retry_initial_delay());

        debug!(
            "API client ready for {} (timeout {:?}, {} retries)",
            config.base_url(),
            config.timeout(),
            config.retries()
        );

        Ok(Self {
            config,
            client,
            retry,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET {base}/health`.
    pub async fn health_check(&self) -> Result<Value, ApiClientError> {
        let url = self.config.endpoint(HEALTH_ENDPOINT);
        info!("Performing health check on {url}...");

        self.execute(|| self.client.get(&url))
            .await
            .inspect_err(|e| error!("API health check failed: {e}"))
    }

    /// `POST {base}/upload` with the content as multipart field `file`.
    ///
    /// The form is rebuilt for every attempt since a multipart body can only be
    /// sent once.
    pub async fn upload_file(
        &self,
        content: impl Into<Vec<u8>>,
        file_name: &str,
    ) -> Result<Value, ApiClientError> {
        let url = self.config.endpoint(UPLOAD_ENDPOINT);
        let content = content.into();
        info!("Uploading file '{file_name}' to {url}...");

        let form = || {
            let part = Part::bytes(content.clone()).file_name(file_name.to_string());
            Form::new().part(UPLOAD_FIELD_NAME, part)
        };

        self.execute(|| self.client.post(&url).multipart(form()))
            .await
            .inspect_err(|e| error!("File upload failed for {file_name}: {e}"))
    }

    /// `POST {base}/process-text` with `{text, name?}`.
    ///
    /// Empty or whitespace-only text is rejected without touching the network.
    /// An empty `document_name` is treated as absent.
    pub async fn process_text(
        &self,
        text: &str,
        document_name: Option<&str>,
    ) -> Result<Value, ApiClientError> {
        let url = self.config.endpoint(PROCESS_TEXT_ENDPOINT);
        let name = document_name.filter(|name| !name.is_empty());
        info!(
            "Sending text for processing (document: {})...",
            name.unwrap_or("N/A")
        );

        if text.trim().is_empty() {
            return Err(ApiClientError::invalid_input(EMPTY_TEXT_MESSAGE));
        }

        let body = ProcessTextBody { text, name };

        self.execute(|| self.client.post(&url).json(&body))
            .await
            .inspect_err(|e| error!("Processing text via API failed: {e}"))
    }

    /// [`health_check`](Self::health_check) read as a [`HealthStatus`].
    pub async fn health_status(&self) -> Result<HealthStatus, ApiClientError> {
        let value = self.health_check().await?;
        HealthStatus::from_value(value)
            .map_err(|e| ApiClientError::server(format!("Unexpected health payload: {e}"), None))
    }

    /// [`upload_file`](Self::upload_file) read as a [`ProcessingResult`].
    pub async fn upload_document(
        &self,
        content: impl Into<Vec<u8>>,
        file_name: &str,
    ) -> Result<ProcessingResult, ApiClientError> {
        let value = self.upload_file(content, file_name).await?;
        parse_processing_result(value)
    }

    /// [`process_text`](Self::process_text) read as a [`ProcessingResult`].
    pub async fn process_document_text(
        &self,
        text: &str,
        document_name: Option<&str>,
    ) -> Result<ProcessingResult, ApiClientError> {
        let value = self.process_text(text, document_name).await?;
        parse_processing_result(value)
    }

    /// Send the request built by `build`, re-sending on transient statuses until
    /// the retry schedule runs out, then classify the final response.
    async fn execute<F>(&self, build: F) -> Result<Value, ApiClientError>
    where
        F: Fn() -> RequestBuilder,
    {
        let mut schedule = self.retry.schedule();
        let mut attempt: u32 = 1;

        loop {
            let response = build().send().await.map_err(|e| {
                error!("API Connection Error: {e}");
                ApiClientError::from(e)
            })?;

            if should_retry(&response) {
                match schedule.next_delay(retry_after(&response)) {
                    Some(delay) => {
                        warn!(
                            "{} returned {}, retry {attempt}/{} in {delay:?}",
                            response.url(),
                            response.status().as_u16(),
                            self.retry.max_retries()
                        );
                        TokioSleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    None if self.retry.max_retries() > 0 => {
                        warn!(
                            "{} still returning {} after {} retries",
                            response.url(),
                            response.status().as_u16(),
                            self.retry.max_retries()
                        );
                    }
                    None => {}
                }
            }

            return handle_response(response).await;
        }
    }
}

fn parse_processing_result(value: Value) -> Result<ProcessingResult, ApiClientError> {
    ProcessingResult::from_value(value)
        .map_err(|e| ApiClientError::server(format!("Unexpected processing payload: {e}"), None))
}
