//! # Taskloop Core Library
//!
//! Core business logic for the Taskloop to-do application: task filtering
//! and due-date bucketing, login-streak tracking with achievement unlocks,
//! free-text search, a calendar agenda view, and a pomodoro countdown.
//!
//! ## Architecture
//!
//! Every component is a pure, synchronous function over caller-supplied
//! data. Nothing here reads the wall clock, performs I/O, or keeps hidden
//! state: "today" is always an argument, so the whole crate is
//! deterministic under test and trivially re-entrant. Storage,
//! authentication, and notification scheduling are collaborators of the
//! surrounding application, not of this crate.
//!
//! ## Key Components
//!
//! - [`classify`]: [`FilterSpec`] filtering and [`DueBucket`] grouping
//! - [`achievements`]: [`LoginStats`] streak machine and the static
//!   achievement catalog
//! - [`timer`]: [`PomodoroTimer`] caller-driven countdown
//! - [`search`] / [`agenda`]: list projections for the search and
//!   calendar views

pub mod achievements;
pub mod agenda;
pub mod classify;
pub mod error;
pub mod search;
pub mod task;
pub mod timer;

pub use achievements::{
    apply_unlocks, catalog, check_login_achievements, check_task_achievements, record_login,
    recompute_tasks_completed, AchievementDef, AchievementKind, LoginStats, Tier,
};
pub use agenda::agenda_items;
pub use classify::{apply_filter, bucketize, classify_due, BucketedTasks, DueBucket, FilterSpec};
pub use error::{CoreError, Result, ValidationError};
pub use search::search_tasks;
pub use task::{Priority, Task, FIXED_CATEGORIES};
pub use timer::{format_hms, Phase, PhaseChange, PomodoroConfig, PomodoroState, PomodoroTimer};
