use crate::cli::OutputArgs;
use crate::output::{write_health, write_history, write_result, write_statistics};

use client_core::SessionHistory;
use client_core::tasks::{SortKey, TaskStatistics};

use models::{ProcessingResult, Task};

use serde_json::json;

fn task(title: &str, priority: Option<&str>, due: Option<&str>) -> Task {
    Task {
        title: title.to_string(),
        priority: priority.map(str::to_string),
        due_date: due.map(str::to_string),
        ..Default::default()
    }
}

fn render<F>(write: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
{
    let mut buffer = Vec::new();
    write(&mut buffer).expect("write to buffer");
    String::from_utf8(buffer).expect("utf-8 output")
}

fn sample_result() -> ProcessingResult {
    ProcessingResult {
        tasks: vec![
            task("Revisar contrato", Some("Alta"), Some("2026-11-01")),
            task("Arquivar", None, None),
            task("Agendar reuniao", Some("Baixa"), Some("  ")),
        ],
        ..Default::default()
    }
}

/// **VALUE**: Verifies the health line shows status and timestamp.
#[test]
fn given_health_body_when_written_then_status_and_timestamp_shown() {
    let text = render(|out| write_health(out, &json!({"status": "ok", "timestamp": "T"})));

    assert_eq!(text, "✓ API status: ok (T)\n");
}

/// **VALUE**: Verifies an unrecognised health body is still shown.
#[test]
fn given_unexpected_health_body_when_written_then_raw_body_shown() {
    let text = render(|out| write_health(out, &json!({"up": true})));

    assert!(text.contains(r#"{"up":true}"#));
}

/// **VALUE**: Verifies sorting and defaults in the task list.
///
/// **WHY THIS MATTERS**: Tasks without a priority must show as "Normal", and a
/// blank due date must not render as "due:".
///
/// **BUG THIS CATCHES**: Would catch sort being ignored or whitespace due dates shown.
#[test]
fn given_tasks_when_written_sorted_by_title_then_ordered_with_defaults() {
    // GIVEN: Title sort
    let options = OutputArgs {
        sort: Some(SortKey::Title),
        ..Default::default()
    };

    // WHEN: Rendering
    let text = render(|out| write_result(out, "ata.txt", &sample_result(), &options));

    // THEN: Header, counts, then tasks by title
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Document: ata.txt");
    assert_eq!(lines[1], "  Tasks: 3 of 3 (priorities: Alta, Baixa, Normal)");
    assert_eq!(lines[2], "  - [Baixa] Agendar reuniao");
    assert_eq!(lines[3], "  - [Normal] Arquivar");
    assert_eq!(lines[4], "  - [Alta] Revisar contrato (due: 2026-11-01)");
}

/// **VALUE**: Verifies a filter that matches nothing says so.
#[test]
fn given_filter_matching_nothing_when_written_then_explains() {
    let options = OutputArgs {
        priorities: vec!["Urgente".to_string()],
        ..Default::default()
    };

    let text = render(|out| write_result(out, "doc", &sample_result(), &options));

    assert!(text.contains("Tasks: 0 of 3"));
    assert!(text.contains("No tasks match the selected priorities."));
}

/// **VALUE**: Verifies an empty result is reported plainly.
#[test]
fn given_no_tasks_when_written_then_no_tasks_found() {
    let text = render(|out| {
        write_result(out, "vazio", &ProcessingResult::default(), &OutputArgs::default())
    });

    assert_eq!(text, "Document: vazio\n  No tasks found.\n");
}

/// **VALUE**: Verifies statistics include counts and percentages.
#[test]
fn given_statistics_when_written_then_counts_and_shares_shown() {
    let stats = TaskStatistics::from_tasks(&sample_result().tasks);

    let text = render(|out| write_statistics(out, &stats));

    assert!(text.contains("Total tasks:    3"));
    assert!(text.contains("High priority:  1"));
    assert!(text.contains("With due date:  1"));
    assert!(text.contains("Alta: 1 (33%)"));
}

/// **VALUE**: Verifies history is listed newest first with totals.
#[test]
fn given_history_when_written_then_newest_first() {
    let mut history = SessionHistory::new();
    history.record("primeiro", sample_result());
    history.record("segundo", ProcessingResult::default());

    let text = render(|out| write_history(out, &history));

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "History: 2 document(s), 3 task(s)");
    assert!(lines[1].starts_with("  #2 segundo - 0 task(s) at "));
    assert!(lines[2].starts_with("  #1 primeiro - 3 task(s) at "));
}
