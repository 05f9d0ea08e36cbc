use client_core::error::api_client::{ApiClientError, ApiErrorKind};

use common::HttpStatusCode;

/// **VALUE**: Verifies an HTTP-derived error shows its category, status, message and location.
///
/// **WHY THIS MATTERS**: These strings end up in the CLI log file; without the
/// status and origin, a report like "Server Error: boom" is not actionable.
///
/// **BUG THIS CATCHES**: Would catch the status suffix or location being dropped
/// from the Display format.
#[test]
fn given_server_error_from_response_when_formatted_then_includes_status_and_location() {
    // GIVEN: A 503 classified from a JSON body
    let err = ApiClientError::from_http_response(HttpStatusCode(503), r#"{"error":"busy"}"#);

    // WHEN: Formatting
    let text = err.to_string();

    // THEN: Category, status, message and this file are present
    assert!(text.starts_with("Server Error (503): busy"), "got {text}");
    assert!(text.contains("api_client.rs"), "got {text}");
    assert_eq!(err.location().file_name(), "api_client.rs");
}

/// **VALUE**: Verifies locally rejected input has no status suffix.
///
/// **BUG THIS CATCHES**: Would catch rendering a placeholder status such as "(0)".
#[test]
fn given_invalid_input_when_formatted_then_no_status_suffix() {
    let err = ApiClientError::invalid_input("Text content cannot be empty.");

    assert!(
        err.to_string()
            .starts_with("Validation Error: Text content cannot be empty.")
    );
    assert_eq!(err.kind(), ApiErrorKind::Validation);
    assert!(err.status_code().is_none());
}

/// **VALUE**: Verifies the status classification table for non-2xx responses.
///
/// **WHY THIS MATTERS**: The CLI picks its hint from the kind; a 404 shown as
/// "server had a problem" sends the user to the wrong place.
///
/// **BUG THIS CATCHES**: Would catch off-by-one ranges (e.g. 499 or 500 in the wrong bucket).
#[test]
fn given_various_statuses_when_classified_then_kind_matches_range() {
    let cases = [
        (400, ApiErrorKind::Validation),
        (404, ApiErrorKind::Validation),
        (499, ApiErrorKind::Validation),
        (500, ApiErrorKind::Server),
        (599, ApiErrorKind::Server),
        (302, ApiErrorKind::Server),
    ];

    for (code, expected) in cases {
        let err = ApiClientError::from_http_response(HttpStatusCode(code), "x");
        assert_eq!(err.kind(), expected, "status {code}");
        assert_eq!(err.status_code(), Some(HttpStatusCode(code)));
    }
}

/// **VALUE**: Verifies statuses outside 4xx/5xx are flagged as unexpected.
#[test]
fn given_redirect_status_when_classified_then_message_marks_unexpected_status() {
    let err = ApiClientError::from_http_response(HttpStatusCode(302), "moved");

    assert_eq!(err.message(), "Unexpected status 302: moved");
}

/// **VALUE**: Verifies which errors are worth re-issuing.
///
/// **BUG THIS CATCHES**: Would catch 501 (permanent) being reported as retryable,
/// or connection failures being treated as final.
#[test]
fn given_each_error_kind_when_checking_retryable_then_matches_transience() {
    assert!(ApiClientError::connection("refused", false).is_retryable());
    assert!(ApiClientError::server("busy", Some(HttpStatusCode(503))).is_retryable());
    assert!(ApiClientError::server("rate", Some(HttpStatusCode(429))).is_retryable());
    assert!(!ApiClientError::server("nope", Some(HttpStatusCode(501))).is_retryable());
    assert!(!ApiClientError::server("bad payload", None).is_retryable());
    assert!(!ApiClientError::invalid_input("empty").is_retryable());
}

/// **VALUE**: Verifies each kind carries a distinct user hint.
#[test]
fn given_error_kinds_when_asking_hint_then_hints_differ() {
    let connection = ApiClientError::connection("timeout", true);
    assert!(connection.is_timeout());
    assert!(connection.user_hint().contains("API unavailable"));

    let hints = [
        ApiErrorKind::Connection.user_hint(),
        ApiErrorKind::Validation.user_hint(),
        ApiErrorKind::Server.user_hint(),
    ];
    assert_ne!(hints[0], hints[1]);
    assert_ne!(hints[1], hints[2]);
    assert_ne!(hints[0], hints[2]);
    assert_eq!(ApiErrorKind::Server.to_string(), "server");
}

/// **VALUE**: Verifies a non-string `error` field is still surfaced.
#[test]
fn given_structured_error_field_when_classified_then_message_is_its_json() {
    let err = ApiClientError::from_http_response(
        HttpStatusCode(422),
        r#"{"error":{"field":"text"}}"#,
    );

    assert_eq!(err.message(), r#"{"field":"text"}"#);
}
