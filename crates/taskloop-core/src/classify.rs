//! Task filtering and due-date bucketing.
//!
//! Both operations are pure: the caller supplies the task list and, for
//! bucketing, the reference date. Filtering happens first; `bucketize` never
//! consults a [`FilterSpec`].

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Filter constructed per filter-apply action. Not persisted.
///
/// An all-default spec (both status flags false, no categories) means
/// "no filter" and passes every task through.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterSpec {
    /// Keep completed tasks
    pub completed: bool,
    /// Keep incomplete tasks
    pub incomplete: bool,
    /// Keep tasks whose category is in this set; empty = no category filter
    pub categories: BTreeSet<String>,
}

impl FilterSpec {
    /// The no-filter spec.
    pub fn none() -> Self {
        Self::default()
    }

    /// True when this spec passes every task.
    pub fn is_no_filter(&self) -> bool {
        !self.completed && !self.incomplete && self.categories.is_empty()
    }

    /// Whether a single task survives both filter stages.
    ///
    /// The status stage only applies when exactly one of `completed` /
    /// `incomplete` is set; checking both (or neither) means "any status".
    pub fn matches(&self, task: &Task) -> bool {
        let status_ok = match (self.completed, self.incomplete) {
            (true, false) => task.completed,
            (false, true) => !task.completed,
            _ => true,
        };
        let category_ok = self.categories.is_empty() || self.categories.contains(&task.category);
        status_ok && category_ok
    }
}

/// Apply `spec` to `tasks`, preserving the relative order of survivors.
pub fn apply_filter(tasks: &[Task], spec: &FilterSpec) -> Vec<Task> {
    if spec.is_no_filter() {
        return tasks.to_vec();
    }
    tasks.iter().filter(|t| spec.matches(t)).cloned().collect()
}

/// Due-date bucket relative to a reference date.
///
/// Derived, never stored; recomputed whenever "today" or the task list
/// changes. Tasks dated beyond thirty days out, like undated tasks, belong
/// to no bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DueBucket {
    Overdue,
    Today,
    ThisWeek,
    ThisMonth,
}

impl DueBucket {
    /// Display heading for grouped task views.
    pub fn heading(&self) -> &'static str {
        match self {
            DueBucket::Overdue => "Overdue",
            DueBucket::Today => "Today",
            DueBucket::ThisWeek => "This Week",
            DueBucket::ThisMonth => "This Month",
        }
    }
}

/// Classify a due date against a reference date.
///
/// The windows are disjoint, so a date lands in at most one bucket:
/// past dates are overdue, `today+1..=today+7` is this week, and
/// `today+8..=today+30` is this month.
pub fn classify_due(due: NaiveDate, today: NaiveDate) -> Option<DueBucket> {
    let offset = (due - today).num_days();
    match offset {
        i64::MIN..=-1 => Some(DueBucket::Overdue),
        0 => Some(DueBucket::Today),
        1..=7 => Some(DueBucket::ThisWeek),
        8..=30 => Some(DueBucket::ThisMonth),
        _ => None,
    }
}

/// Tasks grouped by due bucket. Order within each bucket follows the
/// input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BucketedTasks {
    pub overdue: Vec<Task>,
    pub today: Vec<Task>,
    pub this_week: Vec<Task>,
    pub this_month: Vec<Task>,
}

impl BucketedTasks {
    pub fn is_empty(&self) -> bool {
        self.overdue.is_empty()
            && self.today.is_empty()
            && self.this_week.is_empty()
            && self.this_month.is_empty()
    }

    /// Non-empty buckets with their headings, in display order.
    pub fn sections(&self) -> Vec<(DueBucket, &[Task])> {
        [
            (DueBucket::Overdue, self.overdue.as_slice()),
            (DueBucket::Today, self.today.as_slice()),
            (DueBucket::ThisWeek, self.this_week.as_slice()),
            (DueBucket::ThisMonth, self.this_month.as_slice()),
        ]
        .into_iter()
        .filter(|(_, tasks)| !tasks.is_empty())
        .collect()
    }
}

/// Group tasks by due bucket relative to `today`.
///
/// `today` is always caller-supplied; this function never reads the wall
/// clock. Undated and out-of-window tasks are dropped from the result.
pub fn bucketize(tasks: &[Task], today: NaiveDate) -> BucketedTasks {
    let mut out = BucketedTasks::default();
    for task in tasks {
        let Some(due) = task.due_date else { continue };
        match classify_due(due, today) {
            Some(DueBucket::Overdue) => out.overdue.push(task.clone()),
            Some(DueBucket::Today) => out.today.push(task.clone()),
            Some(DueBucket::ThisWeek) => out.this_week.push(task.clone()),
            Some(DueBucket::ThisMonth) => out.this_month.push(task.clone()),
            None => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn task(title: &str, category: &str, completed: bool) -> Task {
        let mut t = Task::new(title, category);
        t.completed = completed;
        t
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn no_filter_is_identity() {
        let tasks = vec![
            task("a", "Work", true),
            task("b", "Personal", false),
            task("c", "Health", true),
        ];
        assert_eq!(apply_filter(&tasks, &FilterSpec::none()), tasks);
    }

    #[test]
    fn status_filter_completed_only() {
        let tasks = vec![task("a", "Work", true), task("b", "Work", false)];
        let spec = FilterSpec {
            completed: true,
            ..Default::default()
        };
        let out = apply_filter(&tasks, &spec);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "a");
    }

    #[test]
    fn status_filter_incomplete_only() {
        let tasks = vec![task("a", "Work", true), task("b", "Work", false)];
        let spec = FilterSpec {
            incomplete: true,
            ..Default::default()
        };
        let out = apply_filter(&tasks, &spec);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "b");
    }

    #[test]
    fn both_status_flags_pass_everything() {
        let tasks = vec![task("a", "Work", true), task("b", "Work", false)];
        let spec = FilterSpec {
            completed: true,
            incomplete: true,
            categories: BTreeSet::new(),
        };
        assert_eq!(apply_filter(&tasks, &spec).len(), 2);
    }

    #[test]
    fn category_filter_intersects_with_status() {
        let tasks = vec![
            task("a", "Work", true),
            task("b", "Personal", true),
            task("c", "Work", false),
        ];
        let spec = FilterSpec {
            completed: true,
            incomplete: false,
            categories: BTreeSet::from(["Work".to_string()]),
        };
        let out = apply_filter(&tasks, &spec);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "a");
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let tasks = vec![task("a", "Work", false)];
        let spec = FilterSpec {
            categories: BTreeSet::from(["Gardening".to_string()]),
            ..Default::default()
        };
        assert!(apply_filter(&tasks, &spec).is_empty());
    }

    #[test]
    fn filter_preserves_input_order() {
        let tasks = vec![
            task("first", "Work", false),
            task("second", "Work", true),
            task("third", "Work", false),
        ];
        let spec = FilterSpec {
            incomplete: true,
            ..Default::default()
        };
        let titles: Vec<_> = apply_filter(&tasks, &spec)
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, ["first", "third"]);
    }

    #[test]
    fn classify_due_windows() {
        let t = today();
        assert_eq!(classify_due(t - Duration::days(1), t), Some(DueBucket::Overdue));
        assert_eq!(classify_due(t, t), Some(DueBucket::Today));
        assert_eq!(classify_due(t + Duration::days(1), t), Some(DueBucket::ThisWeek));
        assert_eq!(classify_due(t + Duration::days(7), t), Some(DueBucket::ThisWeek));
        assert_eq!(classify_due(t + Duration::days(8), t), Some(DueBucket::ThisMonth));
        assert_eq!(classify_due(t + Duration::days(30), t), Some(DueBucket::ThisMonth));
        assert_eq!(classify_due(t + Duration::days(31), t), None);
        assert_eq!(classify_due(t + Duration::days(45), t), None);
    }

    #[test]
    fn bucketize_skips_undated_and_far_future() {
        let t = today();
        let dated = task("dated", "Work", false).with_due_date(t + Duration::days(45));
        let undated = task("undated", "Work", false);
        let buckets = bucketize(&[dated, undated], t);
        assert!(buckets.is_empty());
    }

    #[test]
    fn bucketize_groups_by_window() {
        let t = today();
        let tasks = vec![
            task("late", "Work", false).with_due_date(t - Duration::days(3)),
            task("now", "Work", false).with_due_date(t),
            task("soon", "Work", false).with_due_date(t + Duration::days(5)),
            task("later", "Work", false).with_due_date(t + Duration::days(20)),
        ];
        let buckets = bucketize(&tasks, t);
        assert_eq!(buckets.overdue[0].title, "late");
        assert_eq!(buckets.today[0].title, "now");
        assert_eq!(buckets.this_week[0].title, "soon");
        assert_eq!(buckets.this_month[0].title, "later");
        assert_eq!(buckets.sections().len(), 4);
    }
}
