//! End-to-end streak and achievement flows: the sequence the application
//! runs on each login and completion toggle, driven with explicit dates.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use taskloop_core::{
    apply_unlocks, catalog, check_login_achievements, check_task_achievements, record_login,
    recompute_tasks_completed, LoginStats, Task,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// One app-side login: update the streak, then fold new unlocks into stats.
fn login_flow(stats: &LoginStats, today: NaiveDate) -> LoginStats {
    let (updated, streak) = record_login(stats, today);
    apply_unlocks(&updated, check_login_achievements(streak))
}

#[test]
fn five_consecutive_logins_unlock_bronze() {
    let mut stats = LoginStats::default();
    let start = date(2024, 1, 1);
    for day in 0..5 {
        stats = login_flow(&stats, start + Duration::days(day));
    }
    assert_eq!(stats.login_streak, 5);
    assert_eq!(
        stats.unlocked_achievements,
        BTreeSet::from(["login_5_days".to_string()])
    );
}

#[test]
fn missed_day_resets_but_keeps_unlocks() {
    let mut stats = LoginStats::default();
    let start = date(2024, 1, 1);
    for day in 0..5 {
        stats = login_flow(&stats, start + Duration::days(day));
    }
    // Two-day gap: streak restarts, the bronze badge stays.
    stats = login_flow(&stats, start + Duration::days(7));
    assert_eq!(stats.login_streak, 1);
    assert!(stats.unlocked_achievements.contains("login_5_days"));
}

#[test]
fn same_day_replay_keeps_streak_and_last_login() {
    let stats = LoginStats {
        login_streak: 3,
        last_login: Some(date(2024, 1, 1)),
        ..Default::default()
    };
    let stats = login_flow(&stats, date(2024, 1, 2));
    assert_eq!(stats.login_streak, 4);

    let replayed = login_flow(&stats, date(2024, 1, 2));
    assert_eq!(replayed.login_streak, 4);
    assert_eq!(replayed.last_login, Some(date(2024, 1, 2)));
}

#[test]
fn completion_toggle_flow_unlocks_task_badges() {
    let mut tasks: Vec<Task> = (0..7).map(|i| Task::new(format!("t{i}"), "Work")).collect();
    for task in tasks.iter_mut() {
        task.completed = true;
    }

    let mut stats = LoginStats::default();
    stats.tasks_completed = recompute_tasks_completed(&tasks);
    stats = apply_unlocks(&stats, check_task_achievements(stats.tasks_completed));

    assert_eq!(stats.tasks_completed, 7);
    assert_eq!(
        stats.unlocked_achievements,
        BTreeSet::from(["tasks_5_completed".to_string()])
    );

    // Un-completing tasks drops the count but never the badge.
    for task in tasks.iter_mut().take(5) {
        task.completed = false;
    }
    stats.tasks_completed = recompute_tasks_completed(&tasks);
    stats = apply_unlocks(&stats, check_task_achievements(stats.tasks_completed));
    assert_eq!(stats.tasks_completed, 2);
    assert!(stats.unlocked_achievements.contains("tasks_5_completed"));
}

#[test]
fn thirty_day_streak_unlocks_every_login_tier() {
    let mut stats = LoginStats::default();
    let start = date(2024, 3, 1);
    for day in 0..30 {
        stats = login_flow(&stats, start + Duration::days(day));
    }
    assert_eq!(stats.login_streak, 30);
    for def in catalog::by_kind(taskloop_core::AchievementKind::LoginStreak) {
        assert!(stats.unlocked_achievements.contains(def.id));
    }
}

proptest! {
    /// Unlocked sets only ever grow, whatever the login dates look like.
    #[test]
    fn unlocks_are_monotonic_over_any_login_sequence(
        offsets in proptest::collection::vec(0i64..90, 1..40),
    ) {
        let start = date(2024, 1, 1);
        let mut stats = LoginStats::default();
        let mut prev = stats.unlocked_achievements.clone();
        for offset in offsets {
            stats = login_flow(&stats, start + Duration::days(offset));
            prop_assert!(stats.unlocked_achievements.is_superset(&prev));
            prev = stats.unlocked_achievements.clone();
        }
    }

    /// Replaying the same day any number of times never changes the record.
    #[test]
    fn same_day_replay_is_idempotent(replays in 1usize..10) {
        let mut stats = login_flow(&LoginStats::default(), date(2024, 5, 5));
        let snapshot = stats.clone();
        for _ in 0..replays {
            stats = login_flow(&stats, date(2024, 5, 5));
            prop_assert_eq!(&stats, &snapshot);
        }
    }
}
