// Unit tests for task filtering and sorting

use super::task;
use crate::tasks::{SortKey, TaskFilter, available_priorities, filter_and_sort};

use models::Task;

fn sample() -> Vec<Task> {
    vec![
        task("Revisar contrato", Some("Alta"), Some("2024-06-10")),
        task("Agendar reuniao", Some("Baixa"), None),
        task("Atualizar planilha", None, Some("2024-05-01")),
        task("Enviar ata", Some("Alta"), Some("2024-05-20")),
    ]
}

/// **VALUE**: Verifies priorities are listed sorted, unique, with `Normal` for missing.
///
/// **WHY THIS MATTERS**: The priority filter offers exactly these options; a task
/// without priority must still be selectable.
///
/// **BUG THIS CATCHES**: Would catch duplicates or a missing `Normal` bucket.
#[test]
fn given_tasks_when_listing_priorities_then_sorted_unique_with_default() {
    let priorities = available_priorities(&sample());

    assert_eq!(priorities, vec!["Alta", "Baixa", "Normal"]);
}

/// **VALUE**: Verifies a priority filter keeps only matching tasks, in backend order.
///
/// **WHY THIS MATTERS**: Without a sort key the backend's ordering (document order)
/// is meaningful and must be preserved.
///
/// **BUG THIS CATCHES**: Would catch if filtering reorders tasks.
#[test]
fn given_priority_filter_when_applied_then_keeps_matching_in_order() {
    let tasks = sample();
    let filter = TaskFilter::with_priorities(["Alta"]);

    let selected = filter_and_sort(&tasks, &filter, None);

    let titles: Vec<&str> = selected.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Revisar contrato", "Enviar ata"]);
}

/// **VALUE**: Verifies that tasks without priority are matched as `Normal`.
///
/// **BUG THIS CATCHES**: Would catch if the filter compared the raw `Option`.
#[test]
fn given_normal_filter_when_applied_then_matches_tasks_without_priority() {
    let tasks = sample();

    let selected = filter_and_sort(&tasks, &TaskFilter::with_priorities(["Normal"]), None);

    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].title, "Atualizar planilha");
}

/// **VALUE**: Verifies the `None` vs empty-set distinction of `TaskFilter`.
///
/// **WHY THIS MATTERS**: "No filter" shows everything; deselecting every priority
/// shows nothing, as the dashboard's multiselect did.
///
/// **BUG THIS CATCHES**: Would catch if an empty set were treated as "no filter".
#[test]
fn given_all_and_empty_filters_when_applied_then_all_and_nothing() {
    let tasks = sample();

    assert_eq!(filter_and_sort(&tasks, &TaskFilter::all(), None).len(), 4);
    assert!(filter_and_sort(&tasks, &TaskFilter::with_priorities(Vec::<String>::new()), None).is_empty());
}

/// **VALUE**: Verifies due-date sorting puts missing dates first (empty string) and is stable.
///
/// **WHY THIS MATTERS**: Sorting compares field text; ISO dates sort chronologically
/// as text, and missing values sort as `""`.
///
/// **BUG THIS CATCHES**: Would catch if missing values panicked or sorted last.
#[test]
fn given_due_date_sort_when_applied_then_orders_by_text_with_missing_first() {
    let tasks = sample();

    let sorted = filter_and_sort(&tasks, &TaskFilter::all(), Some(SortKey::DueDate));

    let titles: Vec<&str> = sorted.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Agendar reuniao", "Atualizar planilha", "Enviar ata", "Revisar contrato"]
    );
}

#[test]
fn given_priority_sort_when_applied_then_missing_priority_sorts_first_and_ties_keep_order() {
    let tasks = sample();

    let sorted = filter_and_sort(&tasks, &TaskFilter::all(), Some(SortKey::Priority));

    let titles: Vec<&str> = sorted.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Atualizar planilha", "Revisar contrato", "Enviar ata", "Agendar reuniao"]
    );
}

#[test]
fn given_sort_key_names_when_parsed_then_accepts_aliases() {
    assert_eq!("title".parse::<SortKey>(), Ok(SortKey::Title));
    assert_eq!("Priority".parse::<SortKey>(), Ok(SortKey::Priority));
    assert_eq!("due-date".parse::<SortKey>(), Ok(SortKey::DueDate));
    assert_eq!("dueDate".parse::<SortKey>(), Ok(SortKey::DueDate));
    assert!("assignee".parse::<SortKey>().is_err());
    assert_eq!(SortKey::DueDate.to_string(), "due-date");
}
