// Unit tests for environment configuration
// Uses an in-memory lookup so tests never touch the real process environment

use crate::DEFAULT_API_BASE_URL;
use crate::config::{
    API_BASE_URL_ENV, API_RETRIES_ENV, API_TIMEOUT_SECS_ENV, AppConfig, load_dotenv_file,
};
use crate::error::config::ConfigError;

use std::collections::HashMap;
use std::time::Duration;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

/// **VALUE**: Verifies defaults when no variables are set.
///
/// **WHY THIS MATTERS**: A fresh checkout must talk to a locally running backend
/// on port 3000 without any configuration.
///
/// **BUG THIS CATCHES**: Would catch a changed default address.
#[test]
fn given_empty_environment_when_loading_then_uses_defaults() {
    let config = AppConfig::from_lookup(lookup_from(&[])).expect("defaults load");

    assert_eq!(config.base_url, "http://127.0.0.1:3000/api");
    assert_eq!(config.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.retries, 3);
}

/// **VALUE**: Verifies every variable overrides its default.
///
/// **BUG THIS CATCHES**: Would catch a misspelled variable name.
#[test]
fn given_all_variables_when_loading_then_overrides_defaults() {
    let lookup = lookup_from(&[
        (API_BASE_URL_ENV, "https://tasks.internal/api/"),
        (API_TIMEOUT_SECS_ENV, " 5 "),
        (API_RETRIES_ENV, "0"),
    ]);

    let config = AppConfig::from_lookup(lookup).expect("valid env");
    let client_config = config.client_config().expect("valid client config");

    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.retries, 0);
    assert_eq!(client_config.base_url(), "https://tasks.internal/api");
    assert_eq!(client_config.retries(), 0);
}

/// **VALUE**: Verifies that a non-numeric timeout is reported with key and value.
///
/// **WHY THIS MATTERS**: Silently falling back to the default would hide typos
/// like `API_TIMEOUT_SECS=30s`.
///
/// **BUG THIS CATCHES**: Would catch if parse failures were swallowed.
#[test]
fn given_non_numeric_timeout_when_loading_then_returns_env_parse_error() {
    let result = AppConfig::from_lookup(lookup_from(&[(API_TIMEOUT_SECS_ENV, "30s")]));

    match result {
        Err(ConfigError::EnvParseError { key, value, .. }) => {
            assert_eq!(key, API_TIMEOUT_SECS_ENV);
            assert_eq!(value, "30s");
        }
        other => panic!("Expected EnvParseError, got {other:?}"),
    }
}

/// **VALUE**: Verifies that an empty `API_BASE_URL` fails when building the client config.
///
/// **WHY THIS MATTERS**: `API_BASE_URL=` in a `.env` file must be a construction
/// error rather than requests to a relative URL.
///
/// **BUG THIS CATCHES**: Would catch if empty strings were replaced by the default.
#[test]
fn given_empty_base_url_when_building_client_config_then_validation_error() {
    let config = AppConfig::from_lookup(lookup_from(&[(API_BASE_URL_ENV, "")])).expect("loads");

    let result = config.client_config();

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn given_overrides_when_applied_then_only_given_fields_change() {
    let config = AppConfig::default().with_overrides(None, Some(Duration::from_secs(2)), None);

    assert_eq!(config.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.timeout, Duration::from_secs(2));
    assert_eq!(config.retries, 3);
}

/// **VALUE**: Verifies `.env` handling for missing, valid and malformed files.
///
/// **WHY THIS MATTERS**: A missing file is normal; a malformed one is a setup
/// mistake the user should see.
///
/// **BUG THIS CATCHES**: Would catch if parse errors were ignored or a missing file failed.
#[test]
fn given_dotenv_files_when_loading_then_missing_ok_malformed_error() {
    let dir = tempfile::tempdir().expect("tempdir");

    let missing = dir.path().join("absent.env");
    assert!(!load_dotenv_file(&missing).expect("missing is fine"));

    let valid = dir.path().join("valid.env");
    std::fs::write(&valid, "TASK_DASHBOARD_CONFIG_TEST_VALUE=from-dotenv\n").unwrap();
    assert!(load_dotenv_file(&valid).expect("valid file loads"));
    assert_eq!(
        std::env::var("TASK_DASHBOARD_CONFIG_TEST_VALUE").as_deref(),
        Ok("from-dotenv")
    );

    let malformed = dir.path().join("malformed.env");
    std::fs::write(&malformed, "THIS LINE HAS NO EQUALS SIGN\n").unwrap();
    assert!(matches!(
        load_dotenv_file(&malformed),
        Err(ConfigError::EnvFileError { .. })
    ));
}
