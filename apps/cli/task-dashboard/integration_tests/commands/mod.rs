mod health;
mod text;
mod upload;

use client_core::{ApiClient, SessionHistory};

use models::ClientConfigBuilder;

use task_dashboard::cli::Command;
use task_dashboard::commands::dispatch;
use task_dashboard::error::DashboardError;

use std::time::Duration;

use wiremock::MockServer;

pub(crate) fn client_for(server: &MockServer) -> ApiClient {
    let config = ClientConfigBuilder::default()
        .with_base_url(format!("{}/api", server.uri()))
        .with_timeout(Duration::from_secs(5))
        .with_retries(0)
        .build()
        .expect("valid test config");

    ApiClient::new(config).expect("client builds")
}

/// Run `command` and capture what it printed.
pub(crate) async fn run_command(
    client: &ApiClient,
    command: Command,
    history: &mut SessionHistory,
) -> (Result<(), DashboardError>, String) {
    let mut out = Vec::new();
    let result = dispatch(client, command, history, &mut out).await;
    (result, String::from_utf8(out).expect("utf-8 output"))
}
