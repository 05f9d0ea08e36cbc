//! Client settings from the process environment and an optional `.env` file.
//!
//! | Variable | Default |
//! |---|---|
//! | `API_BASE_URL` | `http://127.0.0.1:3000/api` |
//! | `API_TIMEOUT_SECS` | `30` |
//! | `API_RETRIES` | `3` |
//!
//! Variables already present in the process environment take precedence over
//! the `.env` file.

use crate::DEFAULT_API_BASE_URL;
use crate::error::config::ConfigError;

use common::ErrorLocation;
use models::client_config::{DEFAULT_RETRIES, DEFAULT_TIMEOUT};
use models::{ClientConfig, ClientConfigBuilder};

use std::env;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use log::{debug, info, warn};

pub const API_BASE_URL_ENV: &str = "API_BASE_URL";
pub const API_TIMEOUT_SECS_ENV: &str = "API_TIMEOUT_SECS";
pub const API_RETRIES_ENV: &str = "API_RETRIES";

const DOTENV_FILE_NAME: &str = ".env";

/// Result of attempting to load a `.env` file.
#[derive(Debug)]
pub struct EnvLoadResult {
    /// Path to the loaded file, if one was found.
    pub path: Option<PathBuf>,
    pub loaded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub retries: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            retries: DEFAULT_RETRIES,
        }
    }
}

impl AppConfig {
    /// Load `.env` (if any), then read settings from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a `.env` file exists but cannot be parsed, or
    /// if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_result = try_load_dotenv()?;
        if !env_result.loaded {
            debug!("No .env file found - using process environment only");
        }

        Self::from_lookup(env_lookup)
    }

    /// Read settings through `lookup`, falling back to defaults for absent keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = lookup(API_BASE_URL_ENV).unwrap_or(defaults.base_url);

        let timeout = parse_var::<u64>(&lookup, API_TIMEOUT_SECS_ENV)?
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        let retries = parse_var::<u32>(&lookup, API_RETRIES_ENV)?.unwrap_or(defaults.retries);

        Ok(Self {
            base_url,
            timeout,
            retries,
        })
    }

    /// Replace any setting given explicitly (e.g. on the command line).
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        timeout: Option<Duration>,
        retries: Option<u32>,
    ) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(timeout) = timeout {
            self.timeout = timeout;
        }
        if let Some(retries) = retries {
            self.retries = retries;
        }
        self
    }

    /// Validate into the [`ClientConfig`] the API client is built from.
    #[track_caller]
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        ClientConfigBuilder::default()
            .with_base_url(self.base_url.clone())
            .with_timeout(self.timeout)
            .with_retries(self.retries)
            .build()
            .map_err(|source| ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                source,
            })
    }
}

fn env_lookup(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) => Some(value),
        Err(env::VarError::NotPresent) => None,
        Err(env::VarError::NotUnicode(_)) => {
            warn!("Env var {key} contains invalid unicode, ignoring it");
            None
        }
    }
}

#[track_caller]
fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = lookup(key) else {
        return Ok(None);
    };

    value
        .trim()
        .parse::<T>()
        .map(Some)
        .map_err(|e| ConfigError::EnvParseError {
            location: ErrorLocation::from(Location::caller()),
            key: key.to_string(),
            value: value.clone(),
            reason: e.to_string(),
        })
}

/// Attempts to load `.env` from the current directory, then from the
/// executable's directory.
pub fn try_load_dotenv() -> Result<EnvLoadResult, ConfigError> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = env::current_dir() {
        candidates.push(cwd.join(DOTENV_FILE_NAME));
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join(DOTENV_FILE_NAME));
        }
    }

    for path in candidates {
        if load_dotenv_file(&path)? {
            return Ok(EnvLoadResult {
                path: Some(path),
                loaded: true,
            });
        }
    }

    Ok(EnvLoadResult {
        path: None,
        loaded: false,
    })
}

/// Load one `.env` file. `Ok(false)` when the file does not exist.
#[track_caller]
pub fn load_dotenv_file(path: &Path) -> Result<bool, ConfigError> {
    if !path.exists() {
        return Ok(false);
    }

    dotenvy::from_path(path).map_err(|e| ConfigError::EnvFileError {
        location: ErrorLocation::from(Location::caller()),
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    info!("Loaded .env from: {}", path.display());
    Ok(true)
}
