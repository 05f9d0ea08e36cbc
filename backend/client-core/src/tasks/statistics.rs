use models::Task;

use std::collections::BTreeMap;

/// Priority labels counted as high priority, compared case-insensitively.
pub const HIGH_PRIORITY_LABELS: [&str; 2] = ["alta", "high"];

/// Summary figures for a list of tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStatistics {
    pub total: usize,
    pub high_priority: usize,
    pub with_due_date: usize,
    /// Effective priority -> number of tasks.
    pub priority_distribution: BTreeMap<String, usize>,
}

impl TaskStatistics {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut stats = TaskStatistics {
            total: tasks.len(),
            ..Default::default()
        };

        for task in tasks {
            if is_high_priority(task) {
                stats.high_priority += 1;
            }
            if task.has_due_date() {
                stats.with_due_date += 1;
            }
            *stats
                .priority_distribution
                .entry(task.effective_priority().to_string())
                .or_default() += 1;
        }

        stats
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Share of tasks with the given effective priority, in `0.0..=1.0`.
    pub fn priority_share(&self, priority: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let count = self.priority_distribution.get(priority).copied().unwrap_or(0);
        count as f64 / self.total as f64
    }
}

fn is_high_priority(task: &Task) -> bool {
    task.priority.as_deref().is_some_and(|priority| {
        HIGH_PRIORITY_LABELS
            .iter()
            .any(|label| priority.trim().eq_ignore_ascii_case(label))
    })
}
