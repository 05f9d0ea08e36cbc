use crate::client_config::{DEFAULT_RETRIES, DEFAULT_RETRY_INITIAL_DELAY, DEFAULT_TIMEOUT};
use crate::{ClientConfigBuilder, ModelError};

use std::time::Duration;

/// **VALUE**: Verifies that builder validation rejects an empty base URL.
///
/// **WHY THIS MATTERS**: The API client must fail at construction, not on the first
/// request, when the backend address is missing from the environment.
///
/// **BUG THIS CATCHES**: Would catch if the empty check is removed or only applied
/// before trimming (so `"/"` or `"   "` slipped through).
#[test]
fn given_empty_base_url_when_building_then_returns_validation_error() {
    for raw in ["", "   ", "/", "///"] {
        // GIVEN: Builder with an effectively empty base URL
        let builder = ClientConfigBuilder::default().with_base_url(raw);

        // WHEN: Attempting to build
        let result = builder.build();

        // THEN: Should return validation error
        match result {
            Err(ModelError::Validation { message, .. }) => {
                assert_eq!(message, "Base URL cannot be empty", "input {raw:?}");
            }
            other => panic!("Expected validation error for {raw:?}, got {other:?}"),
        }
    }
}

/// **VALUE**: Verifies that builder validation rejects a missing base URL.
///
/// **WHY THIS MATTERS**: There is no sensible default inside the model layer; the
/// default address belongs to the environment loader.
///
/// **BUG THIS CATCHES**: Would catch if the builder silently invents a base URL.
#[test]
fn given_missing_base_url_when_building_then_returns_validation_error() {
    let result = ClientConfigBuilder::default().with_retries(2).build();

    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert_eq!(message, "Base URL is required");
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
}

/// **VALUE**: Verifies that trailing slashes are stripped from the base URL.
///
/// **WHY THIS MATTERS**: Endpoints are built as `{base}/health`; a trailing slash
/// would produce `//health`, which some backends route differently.
///
/// **BUG THIS CATCHES**: Would catch if only a single trailing slash is removed.
#[test]
fn given_trailing_slashes_when_building_then_strips_them() {
    let config = ClientConfigBuilder::default()
        .with_base_url("http://127.0.0.1:3000/api//")
        .build()
        .expect("valid config");

    assert_eq!(config.base_url(), "http://127.0.0.1:3000/api");
    assert_eq!(config.endpoint("health"), "http://127.0.0.1:3000/api/health");
    assert_eq!(config.endpoint("/upload"), "http://127.0.0.1:3000/api/upload");
}

/// **VALUE**: Verifies that non-http schemes and unparseable URLs are rejected.
///
/// **WHY THIS MATTERS**: reqwest only speaks http(s); an `ftp://` address would fail
/// on every call with a confusing transport error.
///
/// **BUG THIS CATCHES**: Would catch if the scheme check or URL parsing is removed.
#[test]
fn given_invalid_url_when_building_then_returns_validation_error() {
    let ftp = ClientConfigBuilder::default()
        .with_base_url("ftp://files.example.com")
        .build();
    match ftp {
        Err(ModelError::Validation { message, .. }) => {
            assert!(message.starts_with("Invalid base URL format:"));
            assert!(message.contains("ftp://"));
        }
        other => panic!("Expected validation error, got {other:?}"),
    }

    let relative = ClientConfigBuilder::default().with_base_url("api/v1").build();
    match relative {
        Err(ModelError::Validation { message, .. }) => {
            assert!(message.starts_with("Invalid base URL 'api/v1'"));
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
}

/// **VALUE**: Verifies defaults for timeout, retries and initial retry delay.
///
/// **WHY THIS MATTERS**: The dashboard relies on a 30s timeout and three retries
/// starting at 1s when nothing else is configured.
///
/// **BUG THIS CATCHES**: Would catch if defaults drift or are left at zero.
#[test]
fn given_only_base_url_when_building_then_uses_defaults() {
    let config = ClientConfigBuilder::default()
        .with_base_url("https://tasks.example.com/api")
        .build()
        .expect("valid config");

    assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    assert_eq!(config.retries(), DEFAULT_RETRIES);
    assert_eq!(config.retry_initial_delay(), DEFAULT_RETRY_INITIAL_DELAY);
    assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(30));
    assert_eq!(DEFAULT_RETRIES, 3);
}

/// **VALUE**: Verifies that a zero timeout is rejected while zero retries is allowed.
///
/// **WHY THIS MATTERS**: A zero timeout makes every request fail instantly; zero
/// retries is a legitimate "fail fast" setting.
///
/// **BUG THIS CATCHES**: Would catch if the two checks are confused.
#[test]
fn given_zero_timeout_when_building_then_returns_validation_error() {
    let zero_timeout = ClientConfigBuilder::default()
        .with_base_url("http://localhost/api")
        .with_timeout(Duration::ZERO)
        .build();
    assert!(matches!(zero_timeout, Err(ModelError::Validation { .. })));

    let zero_retries = ClientConfigBuilder::default()
        .with_base_url("http://localhost/api")
        .with_retries(0)
        .with_retry_initial_delay(Duration::from_millis(5))
        .build()
        .expect("zero retries is valid");
    assert_eq!(zero_retries.retries(), 0);
    assert_eq!(zero_retries.retry_initial_delay(), Duration::from_millis(5));
}
