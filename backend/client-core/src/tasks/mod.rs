//! Post-processing of extracted tasks: priority filtering, sorting, statistics.

pub mod statistics;

pub use statistics::TaskStatistics;

use models::Task;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Field a task list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Priority,
    DueDate,
}

impl SortKey {
    /// The value compared when sorting; missing fields compare as `""`.
    fn value<'a>(&self, task: &'a Task) -> &'a str {
        match self {
            SortKey::Title => &task.title,
            SortKey::Priority => task.priority.as_deref().unwrap_or_default(),
            SortKey::DueDate => task.due_date.as_deref().unwrap_or_default(),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(SortKey::Title),
            "priority" => Ok(SortKey::Priority),
            "due-date" | "due_date" | "duedate" => Ok(SortKey::DueDate),
            other => Err(format!(
                "unknown sort key '{other}' (expected title, priority or due-date)"
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Title => write!(f, "title"),
            SortKey::Priority => write!(f, "priority"),
            SortKey::DueDate => write!(f, "due-date"),
        }
    }
}

/// Which tasks to keep, by effective priority.
///
/// `priorities: None` keeps every task; `Some(set)` keeps only the labels in the
/// set, so an empty set keeps nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub priorities: Option<BTreeSet<String>>,
}

impl TaskFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_priorities<I, S>(priorities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            priorities: Some(priorities.into_iter().map(Into::into).collect()),
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match &self.priorities {
            Some(priorities) => priorities.contains(task.effective_priority()),
            None => true,
        }
    }
}

/// Distinct effective priorities, sorted.
pub fn available_priorities(tasks: &[Task]) -> Vec<String> {
    tasks
        .iter()
        .map(|task| task.effective_priority().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Tasks passing `filter`, ordered by `sort` (stable) or left in backend order.
pub fn filter_and_sort<'a>(
    tasks: &'a [Task],
    filter: &TaskFilter,
    sort: Option<SortKey>,
) -> Vec<&'a Task> {
    let mut selected: Vec<&Task> = tasks.iter().filter(|task| filter.matches(task)).collect();

    if let Some(key) = sort {
        selected.sort_by(|a, b| key.value(a).cmp(key.value(b)));
    }

    selected
}
