use super::{api_path, client_for};

use client_core::ApiErrorKind;

use common::HttpStatusCode;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// process_text() against a mock backend
// ============================================================================

/// **VALUE**: Verifies empty and whitespace-only text fail locally with no request sent.
///
/// **WHY THIS MATTERS**: Each extraction call costs an LLM invocation on the backend;
/// blank submissions must never reach it.
///
/// **BUG THIS CATCHES**: Would catch if validation moved after the request, or if
/// only the exact empty string were rejected.
#[tokio::test]
async fn given_blank_text_when_processing_then_validation_error_without_request() {
    // GIVEN: A backend that must not be called
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("process-text")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"document": {}, "tasks": []})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, 3);

    for text in ["", " ", "\n\t  \r\n"] {
        // WHEN: Submitting blank text
        let err = client.process_text(text, Some("doc")).await.unwrap_err();

        // THEN: Local validation error with no status code
        assert_eq!(err.kind(), ApiErrorKind::Validation, "text {text:?}");
        assert!(err.status_code().is_none());
        assert_eq!(err.message(), "Text content cannot be empty.");
    }

    // AND: Nothing reached the server
    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty(), "No HTTP request should be recorded");
}

/// **VALUE**: Verifies the JSON body is `{text, name}` when a name is given.
///
/// **BUG THIS CATCHES**: Would catch renamed keys (e.g. `documentName`).
#[tokio::test]
async fn given_text_and_name_when_processing_then_posts_both_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("process-text")))
        .and(body_json(json!({"text": "Ana envia a ata ate sexta", "name": "reuniao"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "document": {"name": "reuniao"},
            "tasks": [{"title": "Enviar ata", "assignee": "Ana", "dueDate": "sexta"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server, 0)
        .process_document_text("Ana envia a ata ate sexta", Some("reuniao"))
        .await
        .expect("processing succeeds");

    assert_eq!(result.tasks[0].assignee.as_deref(), Some("Ana"));
    assert_eq!(result.tasks[0].due_date.as_deref(), Some("sexta"));
}

/// **VALUE**: Verifies `name` is omitted entirely when absent or empty.
///
/// **WHY THIS MATTERS**: The backend treats `"name": null` differently from a
/// missing key and would store a null document name.
///
/// **BUG THIS CATCHES**: Would catch serializing `None` as `null` or sending `""`.
#[tokio::test]
async fn given_no_name_when_processing_then_body_has_only_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("process-text")))
        .and(body_json(json!({"text": "tarefa"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"document": {}, "tasks": []})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server, 0);

    let without = client.process_text("tarefa", None).await.expect("succeeds");
    let empty = client.process_text("tarefa", Some("")).await.expect("succeeds");

    assert_eq!(without, json!({"document": {}, "tasks": []}));
    assert_eq!(empty, without);
}

/// **VALUE**: Verifies the 404 scenario: validation error whose message is the `error` field.
///
/// **BUG THIS CATCHES**: Would catch a 404 being reported as a connection problem.
#[tokio::test]
async fn given_not_found_when_processing_then_validation_error_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("process-text")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
        .mount(&server)
        .await;

    let err = client_for(&server, 3).process_text("algo", None).await.unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::Validation);
    assert_eq!(err.message(), "not found");
    assert_eq!(err.status_code(), Some(HttpStatusCode(404)));
}

/// **VALUE**: Verifies a non-JSON 5xx body becomes the server error message.
///
/// **BUG THIS CATCHES**: Would catch parse failures replacing the message with a JSON error.
#[tokio::test]
async fn given_plain_text_server_error_when_processing_then_message_is_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("process-text")))
        .respond_with(ResponseTemplate::new(501).set_body_string("Not Implemented"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server, 3).process_text("algo", None).await.unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::Server);
    assert_eq!(err.message(), "Not Implemented");
    assert!(!err.is_retryable(), "501 is not a transient status");
}
