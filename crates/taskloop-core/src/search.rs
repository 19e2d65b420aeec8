//! Free-text task search.

use crate::task::Task;

/// Case-insensitive substring search over task title and description.
///
/// An empty or whitespace-only query passes every task. Order of the
/// survivors follows the input.
pub fn search_tasks(tasks: &[Task], query: &str) -> Vec<Task> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return tasks.to_vec();
    }
    tasks
        .iter()
        .filter(|t| {
            t.title.to_lowercase().contains(&query)
                || t.description.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}
