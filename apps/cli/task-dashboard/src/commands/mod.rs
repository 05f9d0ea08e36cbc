pub mod health;
pub mod text;
pub mod upload;

use crate::cli::{Cli, Command, OutputArgs};
use crate::error::DashboardError;
use crate::output::{write_result, write_statistics};

use client_core::tasks::TaskStatistics;
use client_core::{ApiClient, AppConfig, SessionHistory};

use models::ProcessingResult;

use std::io::{Write, stdout};

use log::{debug, info};
use serde_json::Value;

/// Resolve the configuration, build the client, and run the chosen command.
pub async fn run(cli: Cli) -> Result<(), DashboardError> {
    let config = cli.connection.apply(AppConfig::from_env()?);
    let client = ApiClient::new(config.client_config()?)?;
    info!("Using API at {}", client.config().base_url());

    let mut history = SessionHistory::new();
    let mut out = stdout();

    dispatch(&client, cli.command, &mut history, &mut out).await?;
    out.flush()?;

    debug!("Session finished with {} document(s)", history.len());
    Ok(())
}

/// Run one command against an existing client, writing results to `out`.
pub async fn dispatch<W: Write>(
    client: &ApiClient,
    command: Command,
    history: &mut SessionHistory,
    out: &mut W,
) -> Result<(), DashboardError> {
    match command {
        Command::Health => health::run(client, out).await,
        Command::Upload { files, output } => {
            upload::run(client, &files, &output, history, out).await
        }
        Command::Text { name, text, output } => {
            let text = match text {
                Some(text) => text,
                None => text::read_text(tokio::io::stdin()).await?,
            };
            text::run(client, &text, &name, &output, history, out).await
        }
    }
}

/// Record one processing result in the session history and, unless raw JSON
/// was asked for, print it as a task list.
///
/// The document name reported by the backend wins over `fallback_name`. JSON
/// output is left to the caller so a command prints exactly one JSON value.
pub(crate) fn present_result<W: Write>(
    out: &mut W,
    body: Value,
    fallback_name: &str,
    options: &OutputArgs,
    history: &mut SessionHistory,
) -> Result<(), DashboardError> {
    let result = ProcessingResult::from_value(body)?;
    let name = result
        .document
        .name
        .clone()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| fallback_name.to_string());

    if !options.json {
        write_result(out, &name, &result, options)?;
        if options.stats {
            write_statistics(out, &TaskStatistics::from_tasks(&result.tasks))?;
        }
    }

    history.record(name, result);
    Ok(())
}
