use std::cmp::Ordering;

use crate::task::Task;

/// Case-insensitive substring match against title or description. The empty
/// term matches every task.
pub fn matches_search(task: &Task, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    task.title.to_lowercase().contains(&needle)
        || task.description.to_lowercase().contains(&needle)
}

/// Two-key display order: incomplete tasks before completed ones, then
/// priority descending. Ties are left `Equal` so a stable sort keeps the
/// original list order.
pub fn compare_for_display(a: &Task, b: &Task) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| b.priority.rank().cmp(&a.priority.rank()))
}

/// Filters then sorts for rendering. Recomputed on every call; the list is
/// small enough that caching would buy nothing.
pub fn visible<'a>(tasks: &'a [Task], term: &str) -> Vec<&'a Task> {
    let mut out: Vec<&Task> = tasks
        .iter()
        .filter(|task| matches_search(task, term))
        .collect();
    out.sort_by(|a, b| compare_for_display(a, b));
    out
}

#[cfg(test)]
mod tests {
    use super::{compare_for_display, matches_search, visible};
    use crate::task::{Priority, Task};

    fn task(id: u64, title: &str, priority: Priority, completed: bool) -> Task {
        let mut task = Task::new(id, title.to_string(), format!("{title} notes"), priority);
        task.completed = completed;
        task
    }

    #[test]
    fn search_is_case_insensitive_over_both_fields() {
        let t = Task::new(
            1,
            "Buy Groceries".to_string(),
            "milk and EGGS".to_string(),
            Priority::Low,
        );
        assert!(matches_search(&t, ""));
        assert!(matches_search(&t, "groc"));
        assert!(matches_search(&t, "GROC"));
        assert!(matches_search(&t, "eggs"));
        assert!(!matches_search(&t, "butter"));
    }

    #[test]
    fn incomplete_tasks_sort_before_completed() {
        let done = task(1, "a", Priority::High, true);
        let open = task(2, "b", Priority::Low, false);
        assert_eq!(
            compare_for_display(&open, &done),
            std::cmp::Ordering::Less
        );
    }

    #[test]
    fn visible_orders_by_completedness_then_priority() {
        let tasks = vec![
            task(1, "low open", Priority::Low, false),
            task(2, "high done", Priority::High, true),
            task(3, "high open", Priority::High, false),
            task(4, "medium open", Priority::Medium, false),
            task(5, "low done", Priority::Low, true),
        ];
        let ids: Vec<u64> = visible(&tasks, "").iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 4, 1, 2, 5]);
    }

    #[test]
    fn equal_keys_keep_insertion_order() {
        let tasks = vec![
            task(10, "first", Priority::Medium, false),
            task(11, "second", Priority::Medium, false),
            task(12, "third", Priority::Medium, false),
        ];
        let ids: Vec<u64> = visible(&tasks, "").iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![10, 11, 12]);
    }

    #[test]
    fn visible_filters_before_sorting() {
        let tasks = vec![
            task(1, "write report", Priority::Low, false),
            task(2, "file report", Priority::High, false),
            task(3, "walk dog", Priority::High, false),
        ];
        let ids: Vec<u64> = visible(&tasks, "report").iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
