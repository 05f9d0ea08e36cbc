//! Logging for the dashboard CLI.
//!
//! Console output goes to stderr (stdout carries command results) with colors;
//! an optional plain-text log file is added when a log directory is given.

use crate::error::DashboardError;

use std::io::stderr;
use std::path::Path;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

/// Thread-safe initialization guard.
static INIT_LOGGER_ONCE: Once = Once::new();

/// Tracks if logger initialization was already attempted.
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

pub const LOG_FILE_NAME: &str = "task-dashboard.log";

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";

const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

/// Console level for a `-v` count: warnings only, then info, then debug.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize the global logger.
///
/// Safe to call more than once: later calls log a warning and return Ok.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a global logger is
/// already installed by someone else.
pub fn initialize(level: LevelFilter, log_dir: Option<&Path>) -> Result<(), DashboardError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = build_dispatch(level, log_dir).and_then(|dispatch| {
            dispatch.apply().map_err(|e| {
                DashboardError::dashboard(format!("Failed to initialize logger: {e}"))
            })
        });
        if result.is_ok() {
            info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{level:?}");
        }
    });

    result
}

/// Build the dispatch tree without installing it.
///
/// The file dispatch is only chained when `log_dir` is given; the file is
/// created (or appended to) here.
pub fn build_dispatch(
    level: LevelFilter,
    log_dir: Option<&Path>,
) -> Result<Dispatch, DashboardError> {
    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let console_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message}",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
            ))
        })
        .chain(stderr());

    let mut base_dispatch = Dispatch::new()
        .level(level)
        .level_for("hyper_util", LevelFilter::Warn)
        .level_for("reqwest", LevelFilter::Warn)
        .chain(console_dispatch);

    if let Some(log_dir) = log_dir {
        let log_file_path = log_dir.join(LOG_FILE_NAME);
        let log_file = fern::log_file(&log_file_path).map_err(|e| {
            DashboardError::dashboard(format!(
                "Failed to create log file {}: {e}",
                log_file_path.display()
            ))
        })?;

        let file_dispatch = Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0)
                ))
            })
            .chain(log_file);

        base_dispatch = base_dispatch.chain(file_dispatch);
    }

    Ok(base_dispatch)
}
