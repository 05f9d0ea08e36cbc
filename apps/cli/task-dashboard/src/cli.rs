//! Command-line surface of the dashboard.
//!
//! Connection settings come from the environment (and `.env`) first; the flags
//! here only override what was given explicitly.

use client_core::AppConfig;
use client_core::tasks::{SortKey, TaskFilter};

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

/// Document name used for pasted text when none is given.
pub const DEFAULT_TEXT_DOCUMENT_NAME: &str = "texto_direto";

pub const LOG_DIR_ENV: &str = "TASK_DASHBOARD_LOG_DIR";

/// Extract tasks from documents through the task-extraction API.
#[derive(Debug, Parser)]
#[command(name = "task-dashboard", version)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Directory for a plain-text log file, in addition to console logging.
    #[arg(long, env = LOG_DIR_ENV, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Increase console log detail (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Overrides for the API connection settings.
#[derive(Debug, Clone, Default, Args)]
pub struct ConnectionArgs {
    /// API base URL, e.g. http://127.0.0.1:3000/api (overrides API_BASE_URL).
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds (overrides API_TIMEOUT_SECS).
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Retries for transient server errors (overrides API_RETRIES).
    #[arg(long, global = true, value_name = "N")]
    pub retries: Option<u32>,
}

impl ConnectionArgs {
    pub fn apply(&self, config: AppConfig) -> AppConfig {
        config.with_overrides(
            self.base_url.clone(),
            self.timeout.map(Duration::from_secs),
            self.retries,
        )
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check whether the API is up.
    Health,

    /// Upload documents and list the tasks extracted from each.
    Upload {
        /// Files to upload; they are sent concurrently.
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Extract tasks from text given as an argument or on stdin.
    Text {
        /// Name recorded for the document.
        #[arg(long, default_value = DEFAULT_TEXT_DOCUMENT_NAME)]
        name: String,

        /// Text to process; read from stdin when omitted.
        text: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// How extracted tasks are displayed.
#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// Only show tasks with this priority (repeatable).
    #[arg(long = "priority", value_name = "PRIORITY")]
    pub priorities: Vec<String>,

    /// Order tasks by title, priority or due-date.
    #[arg(long, value_name = "KEY")]
    pub sort: Option<SortKey>,

    /// Print task statistics after the list.
    #[arg(long)]
    pub stats: bool,

    /// Print the raw API response instead of the formatted list.
    #[arg(long)]
    pub json: bool,
}

impl OutputArgs {
    pub fn filter(&self) -> TaskFilter {
        if self.priorities.is_empty() {
            TaskFilter::all()
        } else {
            TaskFilter::with_priorities(self.priorities.iter().cloned())
        }
    }
}
