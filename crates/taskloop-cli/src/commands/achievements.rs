//! Achievement catalog display.

use std::error::Error;

use clap::Subcommand;
use serde::Serialize;
use taskloop_core::catalog;

use crate::store::Store;

#[derive(Subcommand)]
pub enum AchievementsAction {
    /// List all achievements with unlock state
    List {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct AchievementRow {
    id: &'static str,
    tier: taskloop_core::Tier,
    caption: &'static str,
    unlocked: bool,
}

pub fn run(action: AchievementsAction) -> Result<(), Box<dyn Error>> {
    let store = Store::open()?;

    match action {
        AchievementsAction::List { json } => {
            let rows: Vec<AchievementRow> = catalog::all()
                .iter()
                .map(|def| AchievementRow {
                    id: def.id,
                    tier: def.tier,
                    caption: def.caption,
                    unlocked: store.data.stats.unlocked_achievements.contains(def.id),
                })
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in rows {
                    let mark = if row.unlocked { "x" } else { " " };
                    println!("  [{mark}] {} ({:?})", row.caption, row.tier);
                }
            }
        }
    }
    Ok(())
}
