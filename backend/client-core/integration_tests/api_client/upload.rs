use super::{api_path, client_for};

use client_core::ApiErrorKind;

use common::HttpStatusCode;

use serde_json::json;
use wiremock::matchers::{body_string_contains, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// upload_file() against a mock backend
// ============================================================================

/// **VALUE**: Verifies the upload is a multipart POST with field `file` and the filename kept.
///
/// **WHY THIS MATTERS**: The backend reads the document name from the multipart
/// filename; losing it makes every result show "N/A".
///
/// **BUG THIS CATCHES**: Would catch a renamed field, a dropped filename, or a JSON body.
#[tokio::test]
async fn given_file_when_uploaded_then_sends_multipart_with_filename() {
    // GIVEN: A backend that only accepts the expected multipart shape
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("upload")))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains(r#"name="file""#))
        .and(body_string_contains(r#"filename="a.txt""#))
        .and(body_string_contains("hello"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "document": {"name": "a.txt"},
            "tasks": [{"title": "Say hello", "priority": "Alta"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Uploading
    let result = client_for(&server, 0)
        .upload_document(b"hello".to_vec(), "a.txt")
        .await
        .expect("upload succeeds");

    // THEN: Typed result reflects the backend response
    assert_eq!(result.document.display_name(), "a.txt");
    assert_eq!(result.tasks.len(), 1);
    assert_eq!(result.tasks[0].title, "Say hello");
}

/// **VALUE**: Verifies a 4xx with an `error` field surfaces that message as a validation error.
///
/// **WHY THIS MATTERS**: The backend rejects unsupported file types with a readable reason.
///
/// **BUG THIS CATCHES**: Would catch if the raw JSON body became the message.
#[tokio::test]
async fn given_rejected_file_when_uploaded_then_validation_error_with_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("upload")))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Unsupported file type"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server, 3)
        .upload_file(b"%PDF".to_vec(), "scan.pdf")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::Validation);
    assert_eq!(err.message(), "Unsupported file type");
    assert_eq!(err.status_code(), Some(HttpStatusCode(400)));
    assert!(!err.is_retryable());
}

/// **VALUE**: Verifies a success body of the wrong shape is a server error from the typed wrapper.
///
/// **BUG THIS CATCHES**: Would catch a panic when `tasks` is not a list.
#[tokio::test]
async fn given_malformed_success_body_when_uploaded_typed_then_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("upload")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tasks": {"oops": true}})))
        .mount(&server)
        .await;

    let client = client_for(&server, 0);

    let raw = client.upload_file(b"x".to_vec(), "x.txt").await.expect("raw call succeeds");
    assert_eq!(raw, json!({"tasks": {"oops": true}}));

    let err = client.upload_document(b"x".to_vec(), "x.txt").await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Server);
    assert!(err.message().starts_with("Unexpected processing payload"));
}
