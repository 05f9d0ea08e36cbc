// Unit tests for DashboardError: hints, exit codes and terminal messages

use crate::error::DashboardError;

use client_core::{ApiClientError, ConfigError};

use common::{ErrorLocation, HttpStatusCode};

use models::ClientConfigBuilder;

use std::panic::Location;

/// **VALUE**: Verifies each API error category gets its own hint and exit code.
///
/// **WHY THIS MATTERS**: Scripts branch on the exit code; users act on the hint.
/// A connection problem and a rejected input need different responses.
///
/// **BUG THIS CATCHES**: Would catch the categories collapsing into one generic failure.
#[test]
fn given_api_errors_of_each_kind_when_mapped_then_hints_and_codes_differ() {
    // GIVEN: One error per category
    let connection = DashboardError::from(ApiClientError::connection("refused", false));
    let validation = DashboardError::from(ApiClientError::invalid_input("empty"));
    let server = DashboardError::from(ApiClientError::server("boom", Some(HttpStatusCode(500))));

    // WHEN/THEN: Codes are distinct and non-zero
    let codes = [
        connection.exit_code(),
        validation.exit_code(),
        server.exit_code(),
    ];
    assert_eq!(codes, [3, 4, 5]);

    // AND: Hints are distinct
    let hints = [
        connection.user_hint(),
        validation.user_hint(),
        server.user_hint(),
    ];
    assert!(hints.iter().all(Option::is_some));
    assert_ne!(hints[0], hints[1]);
    assert_ne!(hints[1], hints[2]);
    assert!(hints[0].unwrap_or_default().contains("API unavailable"));
}

/// **VALUE**: Verifies terminal messages drop the source location but keep the status.
///
/// **BUG THIS CATCHES**: Would catch `[file:line:col]` noise leaking into user output.
#[test]
fn given_http_error_when_user_message_then_includes_status_without_location() {
    let err = DashboardError::from(ApiClientError::from_http_response(
        HttpStatusCode(404),
        r#"{"error":"not found"}"#,
    ));

    assert_eq!(err.user_message(), "not found (HTTP 404)");
    assert!(err.to_string().contains("error.rs"), "Display keeps the location");
}

/// **VALUE**: Verifies config failures map to the config hint and exit code.
#[test]
fn given_config_error_when_mapped_then_config_hint() {
    let source = ClientConfigBuilder::default().build().unwrap_err();
    let err = DashboardError::from(ConfigError::ValidationError {
        location: ErrorLocation::from(Location::caller()),
        source,
    });

    assert_eq!(err.exit_code(), 6);
    assert!(err.user_hint().unwrap_or_default().contains("API_BASE_URL"));
}

/// **VALUE**: Verifies local failures keep their plain message and use the generic code.
#[test]
fn given_input_error_when_mapped_then_generic_exit_and_no_hint() {
    let err = DashboardError::input("Failed to read notes.txt");

    assert_eq!(err.user_message(), "Failed to read notes.txt");
    assert_eq!(err.exit_code(), 1);
    assert!(err.user_hint().is_none());
    assert!(err.to_string().starts_with("Input Error: Failed to read notes.txt ["));
}

/// **VALUE**: Verifies write failures convert into Output errors.
#[test]
fn given_io_error_when_converted_then_output_variant() {
    let err = DashboardError::from(std::io::Error::other("broken pipe"));

    assert!(matches!(err, DashboardError::Output { .. }));
    assert!(err.user_message().contains("broken pipe"));
}
