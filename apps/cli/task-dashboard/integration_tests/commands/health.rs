use super::{client_for, run_command};

use client_core::{ApiClient, SessionHistory};

use models::ClientConfigBuilder;

use task_dashboard::cli::Command;

use std::net::TcpListener;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies `health` prints the backend's status line.
#[tokio::test]
async fn given_healthy_backend_when_health_command_then_prints_status() {
    // GIVEN: A healthy backend
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "ok", "timestamp": "2026-10-17T10:00:00Z"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Running the command
    let (result, output) =
        run_command(&client_for(&server), Command::Health, &mut SessionHistory::new()).await;

    // THEN: Success and a status line
    assert!(result.is_ok());
    assert_eq!(output, "✓ API status: ok (2026-10-17T10:00:00Z)\n");
}

/// **VALUE**: Verifies an unreachable backend ends in the connection hint and exit code.
///
/// **WHY THIS MATTERS**: "Is the backend running?" is the most common problem;
/// the CLI must say so instead of printing a transport stack.
///
/// **BUG THIS CATCHES**: Would catch connection failures mapped to the generic exit code.
#[tokio::test]
async fn given_unreachable_backend_when_health_command_then_connection_hint() {
    // GIVEN: A port with nothing listening
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);

    let config = ClientConfigBuilder::default()
        .with_base_url(format!("http://127.0.0.1:{port}/api"))
        .with_retries(0)
        .build()
        .expect("valid config");
    let client = ApiClient::new(config).expect("client builds");

    // WHEN: Running the command
    let (result, output) = run_command(&client, Command::Health, &mut SessionHistory::new()).await;

    // THEN: Nothing printed, connection error surfaced
    assert!(output.is_empty());
    let err = result.unwrap_err();
    assert_eq!(err.exit_code(), 3);
    assert!(err.user_hint().unwrap_or_default().contains("API unavailable"));
}
