//! Static achievement catalog.
//!
//! Six definitions fixed at compile time: login streaks of 5/15/30 days and
//! 5/15/30 completed tasks, one tier each. Screens and the engine both read
//! this table; nothing mutates it.

use serde::{Deserialize, Serialize};

/// Medal tier for an achievement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
}

/// Which counter an achievement is measured against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    LoginStreak,
    TasksCompleted,
}

/// A single achievement definition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AchievementDef {
    pub id: &'static str,
    pub tier: Tier,
    pub caption: &'static str,
    pub kind: AchievementKind,
    /// Counter value at which the achievement unlocks (inclusive).
    pub threshold: u32,
}

pub const CATALOG: [AchievementDef; 6] = [
    AchievementDef {
        id: "login_5_days",
        tier: Tier::Bronze,
        caption: "5-day Login Streak",
        kind: AchievementKind::LoginStreak,
        threshold: 5,
    },
    AchievementDef {
        id: "login_15_days",
        tier: Tier::Silver,
        caption: "15-day Login Streak",
        kind: AchievementKind::LoginStreak,
        threshold: 15,
    },
    AchievementDef {
        id: "login_30_days",
        tier: Tier::Gold,
        caption: "30-day Login Streak",
        kind: AchievementKind::LoginStreak,
        threshold: 30,
    },
    AchievementDef {
        id: "tasks_5_completed",
        tier: Tier::Bronze,
        caption: "5 Tasks Completed",
        kind: AchievementKind::TasksCompleted,
        threshold: 5,
    },
    AchievementDef {
        id: "tasks_15_completed",
        tier: Tier::Silver,
        caption: "15 Tasks Completed",
        kind: AchievementKind::TasksCompleted,
        threshold: 15,
    },
    AchievementDef {
        id: "tasks_30_completed",
        tier: Tier::Gold,
        caption: "30 Tasks Completed",
        kind: AchievementKind::TasksCompleted,
        threshold: 30,
    },
];

/// All achievement definitions in catalog order.
pub fn all() -> &'static [AchievementDef] {
    &CATALOG
}

/// Definitions measured against the given counter.
pub fn by_kind(kind: AchievementKind) -> impl Iterator<Item = &'static AchievementDef> {
    CATALOG.iter().filter(move |def| def.kind == kind)
}

/// Look up a definition by id.
pub fn get(id: &str) -> Option<&'static AchievementDef> {
    CATALOG.iter().find(|def| def.id == id)
}
