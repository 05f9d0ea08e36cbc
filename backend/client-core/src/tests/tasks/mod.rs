mod filter_sort;
mod statistics;

use models::Task;

pub(super) fn task(title: &str, priority: Option<&str>, due_date: Option<&str>) -> Task {
    Task {
        title: title.to_string(),
        priority: priority.map(str::to_string),
        due_date: due_date.map(str::to_string),
        ..Default::default()
    }
}
