use task_dashboard::cli::Cli;
use task_dashboard::commands;
use task_dashboard::error::DashboardError;
use task_dashboard::logger::{initialize as LoggerInitialize, level_for_verbosity};

use std::fs::create_dir_all;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = setup_logging(&cli) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    info!("task-dashboard starting");

    match commands::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {}", e.user_message());
            if let Some(hint) = e.user_hint() {
                eprintln!("{hint}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn setup_logging(cli: &Cli) -> Result<(), DashboardError> {
    if let Some(log_dir) = &cli.log_dir {
        create_dir_all(log_dir).map_err(|e| {
            DashboardError::dashboard(format!(
                "Failed to create log directory {}: {e}",
                log_dir.display()
            ))
        })?;
    }

    LoggerInitialize(level_for_verbosity(cli.verbose), cli.log_dir.as_deref())
}
