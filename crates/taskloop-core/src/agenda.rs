//! Date-keyed agenda view over tasks.
//!
//! The agenda pre-seeds an empty entry for every date in a window around an
//! anchor date so calendar views can render empty days, then files each dated
//! task under its due date. Undated tasks never appear here.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::task::Task;

/// Days before the anchor included in the seeded window.
pub const AGENDA_PAST_DAYS: i64 = 10;
/// Days after the anchor included in the seeded window.
pub const AGENDA_FUTURE_DAYS: i64 = 85;

/// Build the agenda map around `anchor`.
///
/// Every date in `anchor - AGENDA_PAST_DAYS .. anchor + AGENDA_FUTURE_DAYS`
/// gets an entry, empty or not. Tasks due outside the window still get an
/// entry of their own, so nothing dated is silently dropped.
pub fn agenda_items(tasks: &[Task], anchor: NaiveDate) -> BTreeMap<NaiveDate, Vec<Task>> {
    let mut items: BTreeMap<NaiveDate, Vec<Task>> = BTreeMap::new();
    for offset in -AGENDA_PAST_DAYS..AGENDA_FUTURE_DAYS {
        items.insert(anchor + Duration::days(offset), Vec::new());
    }
    for task in tasks {
        if let Some(due) = task.due_date {
            items.entry(due).or_default().push(task.clone());
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn seeds_full_window() {
        let items = agenda_items(&[], anchor());
        assert_eq!(items.len(), (AGENDA_PAST_DAYS + AGENDA_FUTURE_DAYS) as usize);
        assert!(items.contains_key(&(anchor() - Duration::days(AGENDA_PAST_DAYS))));
        assert!(items.contains_key(&(anchor() + Duration::days(AGENDA_FUTURE_DAYS - 1))));
        assert!(!items.contains_key(&(anchor() + Duration::days(AGENDA_FUTURE_DAYS))));
    }

    #[test]
    fn files_tasks_under_due_date() {
        let due = anchor() + Duration::days(3);
        let tasks = vec![
            Task::new("in window", "Work").with_due_date(due),
            Task::new("undated", "Work"),
        ];
        let items = agenda_items(&tasks, anchor());
        assert_eq!(items[&due].len(), 1);
        assert_eq!(items[&due][0].title, "in window");
        let undated_total: usize = items.values().map(Vec::len).sum();
        assert_eq!(undated_total, 1);
    }

    #[test]
    fn out_of_window_due_date_still_gets_entry() {
        let far = anchor() + Duration::days(200);
        let tasks = vec![Task::new("far", "Work").with_due_date(far)];
        let items = agenda_items(&tasks, anchor());
        assert_eq!(items[&far].len(), 1);
        assert_eq!(items.len(), (AGENDA_PAST_DAYS + AGENDA_FUTURE_DAYS) as usize + 1);
    }
}
