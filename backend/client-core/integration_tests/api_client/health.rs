use super::{api_path, client_for};

use client_core::{ApiClient, ApiErrorKind};

use common::HttpStatusCode;

use models::ClientConfigBuilder;

use std::net::TcpListener;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// health_check() against a mock backend
// ============================================================================

/// **VALUE**: Verifies the health check hits `{base}/health` and returns the body as-is.
///
/// **WHY THIS MATTERS**: The status line shows `status` and `timestamp` straight
/// from this response.
///
/// **BUG THIS CATCHES**: Would catch a wrong path (e.g. dropping the `/api` prefix
/// when joining) or a reshaped body.
#[tokio::test]
async fn given_healthy_backend_when_health_check_then_returns_body() {
    // GIVEN: A backend answering 200 on /api/health
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("health")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "ok", "timestamp": "T"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 3);

    // WHEN: Checking health
    let body = client.health_check().await.expect("healthy");

    // THEN: Body is returned verbatim
    assert_eq!(body, json!({"status": "ok", "timestamp": "T"}));
}

#[tokio::test]
async fn given_healthy_backend_when_health_status_then_typed_view() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("health")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "ok", "timestamp": "2024-05-01T12:00:00Z"})),
        )
        .mount(&server)
        .await;

    let status = client_for(&server, 0).health_status().await.expect("healthy");

    assert!(status.is_ok());
    assert_eq!(status.timestamp.as_deref(), Some("2024-05-01T12:00:00Z"));
}

/// **VALUE**: Verifies 204 yields an empty object.
///
/// **BUG THIS CATCHES**: Would catch if the empty body reached the JSON parser.
#[tokio::test]
async fn given_no_content_when_health_check_then_returns_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("health")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let body = client_for(&server, 0)
        .health_check()
        .await
        .expect("no content is success");

    assert_eq!(body, json!({}));
}

/// **VALUE**: Verifies an unreachable backend surfaces as a connection error.
///
/// **WHY THIS MATTERS**: The front-end tells the user to start the backend only
/// for this kind.
///
/// **BUG THIS CATCHES**: Would catch transport errors leaking as server errors or panics.
#[tokio::test]
async fn given_unreachable_backend_when_health_check_then_connection_error() {
    // GIVEN: A base URL on a port that was just released
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);

    let config = ClientConfigBuilder::default()
        .with_base_url(format!("http://127.0.0.1:{port}/api"))
        .with_retries(0)
        .build()
        .expect("valid config");
    let client = ApiClient::new(config).expect("client builds");

    // WHEN: Checking health
    let err = client.health_check().await.unwrap_err();

    // THEN: Connection kind, retryable by the caller, no status
    assert_eq!(err.kind(), ApiErrorKind::Connection);
    assert!(err.is_retryable());
    assert!(err.status_code().is_none());
}

/// **VALUE**: Verifies that the per-request timeout produces a timeout-flagged connection error.
///
/// **WHY THIS MATTERS**: A hung backend must not hang the dashboard forever.
///
/// **BUG THIS CATCHES**: Would catch if the configured timeout is not applied to the pool.
#[tokio::test]
async fn given_slow_backend_when_health_check_then_times_out_as_connection_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("health")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "ok"}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = ClientConfigBuilder::default()
        .with_base_url(format!("{}/api", server.uri()))
        .with_timeout(Duration::from_millis(100))
        .with_retries(0)
        .build()
        .expect("valid config");
    let client = ApiClient::new(config).expect("client builds");

    let err = client.health_check().await.unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::Connection);
    assert!(err.is_timeout(), "Expected timeout flag: {err}");
}

/// **VALUE**: Verifies an HTTP error from `/health` keeps its status category.
///
/// **WHY THIS MATTERS**: A backend that answers 404 is reachable but misrouted;
/// telling the user to check their connection sends them the wrong way.
///
/// **BUG THIS CATCHES**: Would catch every health failure being folded into a
/// connection error.
#[tokio::test]
async fn given_backend_error_status_when_health_check_then_http_category_kept() {
    // GIVEN: A reachable backend without a health route
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("health")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "no route"})))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Checking health
    let err = client_for(&server, 3).health_check().await.unwrap_err();

    // THEN: A validation error with the status, not a connection error
    assert_eq!(err.kind(), ApiErrorKind::Validation);
    assert_eq!(err.status_code(), Some(HttpStatusCode(404)));
    assert_eq!(err.message(), "no route");
}
