//! Login streak tracking and achievement unlocks.
//!
//! Everything here is a pure function over [`LoginStats`] and caller-supplied
//! dates; the surrounding application persists the returned record. "Today"
//! is always an argument, never the wall clock, so streak logic is fully
//! deterministic under test.

pub mod catalog;

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::task::Task;
pub use catalog::{AchievementDef, AchievementKind, Tier};

/// Per-user streak and achievement state.
///
/// Created at registration with zeroed counters; mutated only by replacing
/// it with the record returned from [`record_login`] / [`apply_unlocks`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginStats {
    /// Current consecutive-day login streak
    pub login_streak: u32,
    /// Date of the most recent counted login
    pub last_login: Option<NaiveDate>,
    /// Number of completed tasks, recomputed from the task collection
    pub tasks_completed: u32,
    /// Ids of unlocked achievements; grows monotonically
    pub unlocked_achievements: BTreeSet<String>,
}

/// Record a login on `today` and return the updated stats plus the
/// resulting streak value.
///
/// A repeat login on the same day returns the stats unchanged, including
/// `last_login` (idempotent replay). A login the day after `last_login`
/// extends the streak; any other gap, including a clock that moved
/// backward, resets it to 1.
pub fn record_login(stats: &LoginStats, today: NaiveDate) -> (LoginStats, u32) {
    let streak = match stats.last_login {
        None => 1,
        Some(last) if today == last => return (stats.clone(), stats.login_streak),
        Some(last) if today == last + Duration::days(1) => stats.login_streak + 1,
        Some(_) => 1,
    };
    let mut updated = stats.clone();
    updated.login_streak = streak;
    updated.last_login = Some(today);
    (updated, streak)
}

/// Achievement ids earned by a login streak of `streak` days.
///
/// Thresholds are cumulative: a 30-day streak also returns the 5- and
/// 15-day ids. Re-unlocking an already-held id is a no-op downstream.
pub fn check_login_achievements(streak: u32) -> BTreeSet<&'static str> {
    catalog::by_kind(AchievementKind::LoginStreak)
        .filter(|def| streak >= def.threshold)
        .map(|def| def.id)
        .collect()
}

/// Achievement ids earned by `completed` finished tasks.
pub fn check_task_achievements(completed: u32) -> BTreeSet<&'static str> {
    catalog::by_kind(AchievementKind::TasksCompleted)
        .filter(|def| completed >= def.threshold)
        .map(|def| def.id)
        .collect()
}

/// Union `ids` into the unlocked set. Unlocks are monotonic: ids already
/// present stay, and nothing is ever removed even if the underlying
/// counter later drops below its threshold.
pub fn apply_unlocks<'a, I>(stats: &LoginStats, ids: I) -> LoginStats
where
    I: IntoIterator<Item = &'a str>,
{
    let mut updated = stats.clone();
    updated
        .unlocked_achievements
        .extend(ids.into_iter().map(str::to_string));
    updated
}

/// Count completed tasks in the user's current collection.
///
/// Always a full recompute over the authoritative list, never an
/// incremental delta; small per-user collections make the simpler contract
/// the safer one.
pub fn recompute_tasks_completed(tasks: &[Task]) -> u32 {
    tasks.iter().filter(|t| t.completed).count() as u32
}
