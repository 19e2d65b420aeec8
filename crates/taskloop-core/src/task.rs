//! Task types and the fixed category vocabulary.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task priority.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// The fixed category vocabulary offered by the category picker.
///
/// `Task.category` is a free string and is not checked against this list;
/// filters with categories outside it simply match no tasks.
pub const FIXED_CATEGORIES: [&str; 5] = ["Work", "Personal", "Shopping", "Health", "Finance"];

/// A single to-do item owned by one user.
///
/// `due_date` is a calendar date with no time component; every due-date
/// comparison in this crate is date-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Task title
    pub title: String,
    /// Task description (may be empty)
    pub description: String,
    /// Task priority
    #[serde(default)]
    pub priority: Priority,
    /// Optional due date (calendar date, no time component)
    pub due_date: Option<NaiveDate>,
    /// Category name, normally one of [`FIXED_CATEGORIES`]
    pub category: String,
    /// Whether the task is completed
    pub completed: bool,
    /// Opaque handle from the notification scheduler, carried untouched.
    #[serde(default)]
    pub notification_id: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new incomplete task with a fresh id.
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: String::new(),
            priority: Priority::default(),
            due_date: None,
            category: category.into(),
            completed: false,
            notification_id: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_due_date(mut self, due: NaiveDate) -> Self {
        self.due_date = Some(due);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
