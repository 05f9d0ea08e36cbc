use crate::error::api_client::ApiClientError;

use common::HttpStatusCode;

use log::error;
use reqwest::Response;
use serde_json::{Map, Value};

/// Turn a final (post-retry) response into the call's result.
pub(crate) async fn handle_response(response: Response) -> Result<Value, ApiClientError> {
    let status = HttpStatusCode(response.status().as_u16());

    if status == HttpStatusCode::NO_CONTENT {
        return Ok(empty_result());
    }

    let body = response.text().await.map_err(|e| {
        error!("Failed to read response body (HTTP {status}): {e}");
        ApiClientError::from(e)
    })?;

    classify_response(status, &body)
}

/// Classify a status and body.
///
/// - 204 or an empty 2xx body: `{}`
/// - 2xx: the parsed JSON body
/// - 4xx: [`ApiClientError::Validation`]
/// - 5xx and anything else: [`ApiClientError::Server`]
pub fn classify_response(status: HttpStatusCode, body: &str) -> Result<Value, ApiClientError> {
    if status.is_success() {
        if status == HttpStatusCode::NO_CONTENT || body.trim().is_empty() {
            return Ok(empty_result());
        }

        return serde_json::from_str(body).map_err(|e| {
            error!("Invalid JSON in HTTP {status} response: {e}");
            ApiClientError::server(format!("Invalid JSON in response: {e}"), Some(status))
        });
    }

    let err = ApiClientError::from_http_response(status, body);
    error!("HTTP Error {status}: {}", err.message());
    Err(err)
}

fn empty_result() -> Value {
    Value::Object(Map::new())
}
