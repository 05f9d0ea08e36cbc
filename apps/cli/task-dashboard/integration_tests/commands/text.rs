use super::{client_for, run_command};

use client_core::SessionHistory;

use task_dashboard::cli::{Command, DEFAULT_TEXT_DOCUMENT_NAME, OutputArgs};
use task_dashboard::commands::text::read_text;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn text_command(text: &str, name: &str, output: OutputArgs) -> Command {
    Command::Text {
        name: name.to_string(),
        text: Some(text.to_string()),
        output,
    }
}

/// **VALUE**: Verifies the text command posts the named text and records history.
///
/// **WHY THIS MATTERS**: Pasted text has no file name; the default name is what
/// identifies it in the session history.
///
/// **BUG THIS CATCHES**: Would catch the default name not being sent or recorded.
#[tokio::test]
async fn given_text_with_default_name_when_run_then_tasks_and_history_printed() {
    // GIVEN: A backend expecting the default document name
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/process-text"))
        .and(body_json(json!({"text": "Ligar para o cliente", "name": DEFAULT_TEXT_DOCUMENT_NAME})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "document": {},
            "tasks": [{"title": "Ligar para o cliente", "priority": "Alta"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut history = SessionHistory::new();

    // WHEN: Running the command with stats
    let output_args = OutputArgs {
        stats: true,
        ..Default::default()
    };
    let (result, output) = run_command(
        &client_for(&server),
        text_command("Ligar para o cliente", DEFAULT_TEXT_DOCUMENT_NAME, output_args),
        &mut history,
    )
    .await;

    // THEN: Tasks, statistics and history are printed
    assert!(result.is_ok(), "{result:?}");
    assert!(output.contains(&format!("Document: {DEFAULT_TEXT_DOCUMENT_NAME}")));
    assert!(output.contains("  - [Alta] Ligar para o cliente"));
    assert!(output.contains("High priority:  1"));
    assert!(output.contains("History: 1 document(s), 1 task(s)"));
    assert_eq!(history.len(), 1);
    assert_eq!(
        history.latest().map(|entry| entry.document_name.as_str()),
        Some(DEFAULT_TEXT_DOCUMENT_NAME)
    );
}

/// **VALUE**: Verifies `--json` prints exactly one JSON value and nothing else.
///
/// **WHY THIS MATTERS**: `--json` output is piped into other tools; any trailing
/// text such as the history summary makes it unparseable.
///
/// **BUG THIS CATCHES**: Would catch the history summary or task list being
/// appended after the raw body.
#[tokio::test]
async fn given_json_flag_when_run_then_stdout_is_single_json_document() {
    // GIVEN: A backend returning extra document fields
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/process-text"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "document": {"name": "notas", "id": 42},
            "tasks": []
        })))
        .mount(&server)
        .await;

    let output_args = OutputArgs {
        json: true,
        stats: true,
        ..Default::default()
    };
    let mut history = SessionHistory::new();

    // WHEN: Running with --json
    let (result, output) = run_command(
        &client_for(&server),
        text_command("algo", "notas", output_args),
        &mut history,
    )
    .await;

    // THEN: The whole of stdout parses as the raw body
    assert!(result.is_ok(), "{result:?}");
    let printed: serde_json::Value =
        serde_json::from_str(&output).expect("stdout is a single JSON document");
    assert_eq!(printed["document"]["id"], json!(42));

    // AND: The result is still recorded
    assert_eq!(history.len(), 1);
}

/// **VALUE**: Verifies blank text fails before any request, with the validation exit code.
#[tokio::test]
async fn given_blank_text_when_run_then_validation_error_and_no_request() {
    let server = MockServer::start().await;

    let (result, output) = run_command(
        &client_for(&server),
        text_command("   ", "x", OutputArgs::default()),
        &mut SessionHistory::new(),
    )
    .await;

    assert!(output.is_empty());
    assert_eq!(result.unwrap_err().exit_code(), 4);
    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}

/// **VALUE**: Verifies text is read in full from a reader such as stdin.
#[tokio::test]
async fn given_reader_when_read_text_then_returns_all_content() {
    let input: &[u8] = "linha um\nlinha dois\n".as_bytes();

    let text = read_text(input).await.expect("read succeeds");

    assert_eq!(text, "linha um\nlinha dois\n");
}

/// **VALUE**: Verifies invalid UTF-8 input is an input error, not a panic.
#[tokio::test]
async fn given_invalid_utf8_when_read_text_then_input_error() {
    let input: &[u8] = &[0xff, 0xfe, 0xfd];

    let err = read_text(input).await.unwrap_err();

    assert!(err.user_message().starts_with("Failed to read text"));
}
