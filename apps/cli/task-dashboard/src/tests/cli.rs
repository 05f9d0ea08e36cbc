use crate::cli::{Cli, Command, ConnectionArgs, DEFAULT_TEXT_DOCUMENT_NAME, OutputArgs};

use client_core::AppConfig;
use client_core::tasks::SortKey;

use models::Task;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// **VALUE**: Verifies the upload command collects every file and the output options.
///
/// **BUG THIS CATCHES**: Would catch `--priority` keeping only the last value, or
/// the sort key failing to parse from its kebab-case name.
#[test]
fn given_upload_args_when_parsed_then_files_and_output_options_collected() {
    // GIVEN/WHEN: A full upload command line
    let cli = Cli::try_parse_from([
        "task-dashboard",
        "upload",
        "a.txt",
        "b.md",
        "--priority",
        "Alta",
        "--priority",
        "Normal",
        "--sort",
        "due-date",
        "--stats",
    ])
    .expect("valid command line");

    // THEN: Everything lands where expected
    let Command::Upload { files, output } = cli.command else {
        panic!("expected upload command");
    };
    assert_eq!(files, vec![PathBuf::from("a.txt"), PathBuf::from("b.md")]);
    assert_eq!(output.priorities, vec!["Alta", "Normal"]);
    assert_eq!(output.sort, Some(SortKey::DueDate));
    assert!(output.stats);
    assert!(!output.json);
}

/// **VALUE**: Verifies `upload` with no files is a usage error.
#[test]
fn given_upload_without_files_when_parsed_then_error() {
    assert!(Cli::try_parse_from(["task-dashboard", "upload"]).is_err());
}

/// **VALUE**: Verifies an unknown sort key is rejected at parse time.
#[test]
fn given_unknown_sort_key_when_parsed_then_error() {
    let result = Cli::try_parse_from(["task-dashboard", "text", "hi", "--sort", "owner"]);
    assert!(result.is_err());
}

/// **VALUE**: Verifies the text command's default document name and optional text.
///
/// **WHY THIS MATTERS**: With no text argument the command reads stdin; the
/// name must still default so history entries are labelled.
#[test]
fn given_text_without_args_when_parsed_then_default_name_and_no_text() {
    let cli = Cli::try_parse_from(["task-dashboard", "text"]).expect("valid");

    let Command::Text { name, text, .. } = cli.command else {
        panic!("expected text command");
    };
    assert_eq!(name, DEFAULT_TEXT_DOCUMENT_NAME);
    assert!(text.is_none());
}

/// **VALUE**: Verifies connection flags are accepted after the subcommand.
#[test]
fn given_global_flags_after_subcommand_when_parsed_then_connection_args_set() {
    let cli = Cli::try_parse_from([
        "task-dashboard",
        "health",
        "--base-url",
        "http://api.local/api",
        "--timeout",
        "5",
        "--retries",
        "0",
        "-vv",
    ])
    .expect("valid");

    assert_eq!(cli.connection.base_url.as_deref(), Some("http://api.local/api"));
    assert_eq!(cli.connection.timeout, Some(5));
    assert_eq!(cli.connection.retries, Some(0));
    assert_eq!(cli.verbose, 2);
}

/// **VALUE**: Verifies flags override only what they name.
///
/// **BUG THIS CATCHES**: Would catch an unset flag resetting an environment value
/// back to its default.
#[test]
fn given_partial_overrides_when_applied_then_other_settings_kept() {
    // GIVEN: Settings as read from the environment
    let from_env = AppConfig {
        base_url: "http://env.local/api".to_string(),
        timeout: Duration::from_secs(60),
        retries: 7,
    };
    let args = ConnectionArgs {
        timeout: Some(2),
        ..Default::default()
    };

    // WHEN: Applying the flags
    let config = args.apply(from_env);

    // THEN: Only the timeout changed
    assert_eq!(config.base_url, "http://env.local/api");
    assert_eq!(config.timeout, Duration::from_secs(2));
    assert_eq!(config.retries, 7);
}

/// **VALUE**: Verifies no `--priority` flag means no filtering.
#[test]
fn given_no_priority_flags_when_building_filter_then_all_tasks_match() {
    let task = Task {
        title: "x".to_string(),
        ..Default::default()
    };

    assert!(OutputArgs::default().filter().matches(&task));

    let only_high = OutputArgs {
        priorities: vec!["Alta".to_string()],
        ..Default::default()
    };
    assert!(!only_high.filter().matches(&task));
}
