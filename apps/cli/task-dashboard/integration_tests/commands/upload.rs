use super::{client_for, run_command};

use client_core::SessionHistory;

use task_dashboard::cli::{Command, OutputArgs};
use task_dashboard::commands::upload::MAX_UPLOAD_BYTES;
use task_dashboard::error::DashboardError;

use std::fs::{self, File};
use std::path::PathBuf;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let file = dir.path().join(name);
    fs::write(&file, content).expect("write fixture");
    file
}

/// **VALUE**: Verifies several files are uploaded and reported in argument order.
///
/// **WHY THIS MATTERS**: Uploads run concurrently, so completion order is
/// arbitrary; the printed report and history must still follow the command line.
///
/// **BUG THIS CATCHES**: Would catch results printed in completion order or a
/// file silently skipped.
#[tokio::test]
async fn given_two_files_when_uploaded_then_both_reported_in_order() {
    // GIVEN: Two files and a backend that names each document after its filename
    let dir = TempDir::new().expect("temp dir");
    let first = write_file(&dir, "ata.txt", "Enviar proposta");
    let second = write_file(&dir, "notas.md", "Revisar orcamento");

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .and(body_string_contains(r#"filename="ata.txt""#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "document": {"name": "ata.txt"},
            "tasks": [{"title": "Enviar proposta", "priority": "Alta"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .and(body_string_contains(r#"filename="notas.md""#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "document": {},
            "tasks": [{"title": "Revisar orcamento"}, {"title": "Pagar fornecedor"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut history = SessionHistory::new();

    // WHEN: Uploading both
    let command = Command::Upload {
        files: vec![first, second],
        output: OutputArgs::default(),
    };
    let (result, output) = run_command(&client_for(&server), command, &mut history).await;

    // THEN: Both documents reported in order, history has both
    assert!(result.is_ok(), "{result:?}");
    let first_at = output.find("Document: ata.txt").expect("first document shown");
    let second_at = output.find("Document: notas.md").expect("second document shown");
    assert!(first_at < second_at);
    assert!(output.contains("History: 2 document(s), 3 task(s)"));
    assert_eq!(history.get(1).map(|e| e.document_name.as_str()), Some("ata.txt"));
    assert_eq!(history.get(2).map(|e| e.document_name.as_str()), Some("notas.md"));
}

/// **VALUE**: Verifies one rejected file doesn't stop the others.
///
/// **BUG THIS CATCHES**: Would catch `?` inside the per-file loop aborting the batch
/// and losing the successful results.
#[tokio::test]
async fn given_one_rejected_file_when_uploaded_then_others_reported_and_batch_fails() {
    // GIVEN: One accepted file, one the backend rejects, one missing on disk
    let dir = TempDir::new().expect("temp dir");
    let good = write_file(&dir, "good.txt", "ok");
    let bad = write_file(&dir, "bad.exe", "MZ");
    let missing = dir.path().join("missing.txt");

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .and(body_string_contains(r#"filename="good.txt""#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "document": {"name": "good.txt"},
            "tasks": []
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .and(body_string_contains(r#"filename="bad.exe""#))
        .respond_with(
            ResponseTemplate::new(415).set_body_json(json!({"error": "Unsupported file type"})),
        )
        .mount(&server)
        .await;

    let mut history = SessionHistory::new();

    // WHEN: Uploading all three
    let command = Command::Upload {
        files: vec![good, bad, missing],
        output: OutputArgs::default(),
    };
    let (result, output) = run_command(&client_for(&server), command, &mut history).await;

    // THEN: The good file is reported and recorded
    assert!(output.contains("Document: good.txt"));
    assert_eq!(history.len(), 1);

    // AND: Each failure is listed with its reason
    assert!(output.contains("bad.exe: Unsupported file type (HTTP 415)"));
    assert!(output.contains("missing.txt: Failed to read"));

    // AND: The batch reports two failures
    match result {
        Err(DashboardError::UploadFailed { failed, total, .. }) => {
            assert_eq!((failed, total), (2, 3));
        }
        other => panic!("expected UploadFailed, got {other:?}"),
    }
}

/// **VALUE**: Verifies `--json` upload output is one JSON array of the successful bodies.
///
/// **WHY THIS MATTERS**: Scripts parse stdout; per-file error lines or the history
/// summary mixed into it break every consumer.
///
/// **BUG THIS CATCHES**: Would catch failure lines written to stdout in JSON mode
/// or one JSON document per file concatenated without a container.
#[tokio::test]
async fn given_json_flag_and_one_failure_when_uploaded_then_stdout_is_json_array() {
    // GIVEN: One accepted file and one missing file
    let dir = TempDir::new().expect("temp dir");
    let good = write_file(&dir, "good.txt", "ok");
    let missing = dir.path().join("missing.txt");

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "document": {"name": "good.txt"},
            "tasks": [{"title": "Responder email"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut history = SessionHistory::new();

    // WHEN: Uploading with --json
    let command = Command::Upload {
        files: vec![good, missing],
        output: OutputArgs {
            json: true,
            ..Default::default()
        },
    };
    let (result, output) = run_command(&client_for(&server), command, &mut history).await;

    // THEN: stdout is exactly an array holding the one successful body
    let printed: serde_json::Value =
        serde_json::from_str(&output).expect("stdout is a single JSON document");
    assert_eq!(
        printed,
        json!([{"document": {"name": "good.txt"}, "tasks": [{"title": "Responder email"}]}])
    );

    // AND: The failure still fails the batch
    assert!(matches!(
        result,
        Err(DashboardError::UploadFailed { failed: 1, total: 2, .. })
    ));
    assert_eq!(history.len(), 1);
}

/// **VALUE**: Verifies files over the upload limit are rejected without a request.
///
/// **WHY THIS MATTERS**: Reading a multi-gigabyte file into memory only to have
/// the backend refuse it wastes time and memory.
///
/// **BUG THIS CATCHES**: Would catch the size check being dropped or applied after
/// the file is read and sent.
#[tokio::test]
async fn given_file_over_limit_when_uploaded_then_rejected_locally() {
    // GIVEN: A sparse file one byte over the limit
    let dir = TempDir::new().expect("temp dir");
    let big = dir.path().join("big.txt");
    File::create(&big)
        .and_then(|file| file.set_len(MAX_UPLOAD_BYTES + 1))
        .expect("create sparse file");

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"document": {}, "tasks": []})))
        .expect(0)
        .mount(&server)
        .await;

    // WHEN: Uploading it
    let command = Command::Upload {
        files: vec![big],
        output: OutputArgs::default(),
    };
    let (result, output) =
        run_command(&client_for(&server), command, &mut SessionHistory::new()).await;

    // THEN: The file is reported as over the limit and nothing was sent
    assert!(output.contains("over the 10 MB upload limit"), "got {output}");
    assert!(result.is_err());
    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}
