// Unit tests for task statistics

use super::task;
use crate::tasks::TaskStatistics;

/// **VALUE**: Verifies totals, high-priority and due-date counts on a mixed list.
///
/// **WHY THIS MATTERS**: These are the three headline numbers of the statistics view.
///
/// **BUG THIS CATCHES**: Would catch if blank due dates were counted, or if
/// high-priority matching were case-sensitive.
#[test]
fn given_mixed_tasks_when_computing_statistics_then_counts_match() {
    let tasks = vec![
        task("a", Some("Alta"), Some("2024-05-01")),
        task("b", Some("alta"), Some("  ")),
        task("c", Some("High"), None),
        task("d", Some("Media"), Some("2024-05-03")),
        task("e", None, None),
    ];

    let stats = TaskStatistics::from_tasks(&tasks);

    assert_eq!(stats.total, 5);
    assert_eq!(stats.high_priority, 3);
    assert_eq!(stats.with_due_date, 2);
    assert_eq!(stats.priority_distribution.get("Alta"), Some(&1));
    assert_eq!(stats.priority_distribution.get("alta"), Some(&1));
    assert_eq!(stats.priority_distribution.get("Normal"), Some(&1));
    assert_eq!(stats.priority_distribution.values().sum::<usize>(), 5);
}

/// **VALUE**: Verifies statistics of an empty list are all zero, with no division by zero.
///
/// **WHY THIS MATTERS**: The backend legitimately returns zero tasks for short texts.
///
/// **BUG THIS CATCHES**: Would catch NaN shares or panics on empty input.
#[test]
fn given_no_tasks_when_computing_statistics_then_empty() {
    let stats = TaskStatistics::from_tasks(&[]);

    assert!(stats.is_empty());
    assert!(stats.priority_distribution.is_empty());
    assert_eq!(stats.priority_share("Alta"), 0.0);
}

#[test]
fn given_distribution_when_computing_share_then_fraction_of_total() {
    let tasks = vec![
        task("a", Some("Alta"), None),
        task("b", Some("Baixa"), None),
        task("c", Some("Baixa"), None),
        task("d", Some("Baixa"), None),
    ];

    let stats = TaskStatistics::from_tasks(&tasks);

    assert_eq!(stats.priority_share("Baixa"), 0.75);
    assert_eq!(stats.priority_share("Alta"), 0.25);
    assert_eq!(stats.priority_share("Media"), 0.0);
}
