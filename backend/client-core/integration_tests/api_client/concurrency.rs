use super::{api_path, client_for};

use futures_util::future::join_all;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Concurrent calls through one client
// ============================================================================

/// **VALUE**: Verifies clones of one client can upload concurrently.
///
/// **WHY THIS MATTERS**: The CLI uploads every file argument at once through
/// clones sharing one connection pool.
///
/// **BUG THIS CATCHES**: Would catch shared per-call state (e.g. a retry counter
/// on the client) leaking between concurrent calls.
#[tokio::test]
async fn given_cloned_clients_when_uploading_concurrently_then_all_succeed() {
    // GIVEN: A backend that accepts uploads
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("upload")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"document": {}, "tasks": []})))
        .expect(5)
        .mount(&server)
        .await;

    let client = client_for(&server, 0);

    // WHEN: Five uploads run at the same time
    let uploads = (0..5).map(|i| {
        let client = client.clone();
        async move {
            client
                .upload_document(format!("file {i}").into_bytes(), &format!("f{i}.txt"))
                .await
        }
    });
    let results = join_all(uploads).await;

    // THEN: Every call succeeded independently
    assert!(results.iter().all(Result::is_ok));
}

/// **VALUE**: Verifies the client can be moved into a spawned task.
///
/// **BUG THIS CATCHES**: Would catch the client (or its futures) losing `Send`.
#[tokio::test]
async fn given_client_when_used_from_spawned_task_then_health_check_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("health")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 0);
    let handle = tokio::spawn(async move { client.health_status().await });

    let status = handle.await.expect("task joins").expect("healthy");
    assert!(status.is_ok());
}
