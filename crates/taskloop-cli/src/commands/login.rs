//! Daily login command: streak update plus achievement unlock deltas.

use std::error::Error;

use taskloop_core::{
    apply_unlocks, check_login_achievements, check_task_achievements, record_login,
    recompute_tasks_completed,
};

use super::parse_date_or_today;
use crate::store::Store;

pub fn run(today: Option<String>) -> Result<(), Box<dyn Error>> {
    let mut store = Store::open()?;
    let today = parse_date_or_today(today.as_deref())?;

    let before = store.data.stats.unlocked_achievements.clone();
    let (mut updated, streak) = record_login(&store.data.stats, today);

    // Login is also a sync point for the derived task count, so deletions
    // since the last toggle are picked up here.
    updated.tasks_completed = recompute_tasks_completed(&store.data.tasks);
    let updated = apply_unlocks(&updated, check_login_achievements(streak));
    let updated = apply_unlocks(&updated, check_task_achievements(updated.tasks_completed));

    if store.data.stats.last_login == Some(today) {
        println!("Already logged in today. Streak: {streak}");
    } else {
        println!("Login recorded for {today}. Streak: {streak}");
    }
    for id in updated.unlocked_achievements.difference(&before) {
        println!("Achievement unlocked: {id}");
    }

    store.data.stats = updated;
    store.save()?;
    Ok(())
}
