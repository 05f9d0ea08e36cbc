//! Plain-text rendering of health, task lists, statistics and history.

use crate::cli::OutputArgs;

use client_core::SessionHistory;
use client_core::tasks::{TaskStatistics, available_priorities, filter_and_sort};

use models::{HealthStatus, ProcessingResult, Task};

use std::io::{Result as IoResult, Write};

use serde_json::Value;

pub fn write_health<W: Write>(out: &mut W, body: &Value) -> IoResult<()> {
    match HealthStatus::from_value(body.clone()) {
        Ok(health) => {
            let marker = if health.is_ok() { "✓" } else { "!" };
            write!(out, "{marker} API status: {}", health.status)?;
            if let Some(timestamp) = &health.timestamp {
                write!(out, " ({timestamp})")?;
            }
            writeln!(out)
        }
        Err(_) => writeln!(out, "API responded: {body}"),
    }
}

pub fn write_json<W: Write>(out: &mut W, body: &Value) -> IoResult<()> {
    let pretty = serde_json::to_string_pretty(body).map_err(std::io::Error::other)?;
    writeln!(out, "{pretty}")
}

/// Document header followed by the filtered, sorted task list.
pub fn write_result<W: Write>(
    out: &mut W,
    document_name: &str,
    result: &ProcessingResult,
    options: &OutputArgs,
) -> IoResult<()> {
    writeln!(out, "Document: {document_name}")?;

    if result.tasks.is_empty() {
        return writeln!(out, "  No tasks found.");
    }

    let tasks = filter_and_sort(&result.tasks, &options.filter(), options.sort);
    writeln!(
        out,
        "  Tasks: {} of {} (priorities: {})",
        tasks.len(),
        result.tasks.len(),
        available_priorities(&result.tasks).join(", ")
    )?;

    if tasks.is_empty() {
        return writeln!(out, "  No tasks match the selected priorities.");
    }

    for task in tasks {
        write_task(out, task)?;
    }

    Ok(())
}

fn write_task<W: Write>(out: &mut W, task: &Task) -> IoResult<()> {
    write!(out, "  - [{}] {}", task.effective_priority(), task.title)?;

    let mut details = Vec::new();
    if let Some(assignee) = task.assignee.as_deref().filter(|a| !a.trim().is_empty()) {
        details.push(format!("assignee: {assignee}"));
    }
    if task.has_due_date() {
        details.push(format!("due: {}", task.due_date.as_deref().unwrap_or_default()));
    }
    if !details.is_empty() {
        write!(out, " ({})", details.join(", "))?;
    }
    writeln!(out)?;

    if let Some(description) = task.description.as_deref().filter(|d| !d.trim().is_empty()) {
        writeln!(out, "      {description}")?;
    }

    Ok(())
}

pub fn write_statistics<W: Write>(out: &mut W, stats: &TaskStatistics) -> IoResult<()> {
    writeln!(out, "Statistics:")?;
    writeln!(out, "  Total tasks:    {}", stats.total)?;
    writeln!(out, "  High priority:  {}", stats.high_priority)?;
    writeln!(out, "  With due date:  {}", stats.with_due_date)?;

    if stats.is_empty() {
        return Ok(());
    }

    writeln!(out, "  By priority:")?;
    for (priority, count) in &stats.priority_distribution {
        writeln!(
            out,
            "    {priority}: {count} ({:.0}%)",
            stats.priority_share(priority) * 100.0
        )?;
    }

    Ok(())
}

/// Session summary, most recent document first.
pub fn write_history<W: Write>(out: &mut W, history: &SessionHistory) -> IoResult<()> {
    if history.is_empty() {
        return writeln!(out, "History: no documents processed.");
    }

    writeln!(
        out,
        "History: {} document(s), {} task(s)",
        history.len(),
        history.total_tasks()
    )?;
    for (number, entry) in history.entries_newest_first() {
        writeln!(
            out,
            "  #{number} {} - {} task(s) at {}",
            entry.document_name, entry.tasks_count, entry.timestamp
        )?;
    }

    Ok(())
}
