use super::{api_path, client_for};

use client_core::ApiErrorKind;

use common::HttpStatusCode;

use std::time::Instant;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Retry behaviour on transient statuses
// ============================================================================

/// **VALUE**: Verifies three 503s followed by a 200 yield the success body.
///
/// **WHY THIS MATTERS**: The extraction backend sheds load with 503 while the
/// LLM is busy; a user should not see those blips.
///
/// **BUG THIS CATCHES**: Would catch an off-by-one that gives up one retry early,
/// or a multipart body that cannot be re-sent.
#[tokio::test]
async fn given_three_unavailable_then_ok_when_uploading_then_returns_success_body() {
    // GIVEN: 503 for the first three requests, then 200
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("upload")))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(3)
        .expect(3)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("upload")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"document": {}, "tasks": []})))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Uploading with three retries allowed
    let body = client_for(&server, 3)
        .upload_file(b"hello".to_vec(), "a.txt")
        .await
        .expect("succeeds after retries");

    // THEN: The final success body is returned
    assert_eq!(body, json!({"document": {}, "tasks": []}));
}

/// **VALUE**: Verifies exhausted retries return the last transient response as a server error.
///
/// **BUG THIS CATCHES**: Would catch an infinite loop or a generic "retries exhausted"
/// message that hides the backend's reason.
#[tokio::test]
async fn given_persistent_bad_gateway_when_retries_exhausted_then_server_error_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("health")))
        .respond_with(ResponseTemplate::new(502).set_body_json(json!({"error": "upstream down"})))
        .expect(3)
        .mount(&server)
        .await;

    let err = client_for(&server, 2).health_check().await.unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::Server);
    assert_eq!(err.status_code(), Some(HttpStatusCode(502)));
    assert_eq!(err.message(), "upstream down");
    assert!(err.is_retryable());
}

/// **VALUE**: Verifies non-transient 4xx responses are sent exactly once.
///
/// **WHY THIS MATTERS**: Re-sending a rejected document wastes backend work and
/// delays the error the user needs to see.
///
/// **BUG THIS CATCHES**: Would catch retrying on every non-2xx status.
#[tokio::test]
async fn given_bad_request_when_processing_then_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("process-text")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "bad"})))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server, 3).process_text("algo", None).await.unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::Validation);
    assert_eq!(err.message(), "bad");
}

/// **VALUE**: Verifies a retry count of zero means exactly one request.
///
/// **BUG THIS CATCHES**: Would catch treating `retries` as total attempts.
#[tokio::test]
async fn given_zero_retries_when_service_unavailable_then_single_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("health")))
        .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server, 0).health_check().await.unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::Server);
    assert_eq!(err.message(), "busy");
}

/// **VALUE**: Verifies 429 with `Retry-After: 0` is retried on the normal schedule.
///
/// **BUG THIS CATCHES**: Would catch a zero hint collapsing the backoff or
/// 429 being left out of the transient set.
#[tokio::test]
async fn given_too_many_requests_with_zero_retry_after_when_called_then_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("health")))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("health")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let started = Instant::now();
    let body = client_for(&server, 1).health_check().await.expect("retried");

    assert_eq!(body, json!({"status": "ok"}));
    assert!(started.elapsed() >= super::TEST_RETRY_DELAY);
}
