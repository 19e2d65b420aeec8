//! Calendar agenda command.

use std::error::Error;

use taskloop_core::agenda_items;

use super::parse_date_or_today;
use crate::store::Store;

pub fn run(anchor: Option<String>) -> Result<(), Box<dyn Error>> {
    let store = Store::open()?;
    let anchor = parse_date_or_today(anchor.as_deref())?;

    let items = agenda_items(&store.data.tasks, anchor);
    let mut any = false;
    for (date, tasks) in &items {
        if tasks.is_empty() {
            continue;
        }
        any = true;
        println!("{date}:");
        for task in tasks {
            let mark = if task.completed { "x" } else { " " };
            println!("  [{mark}] {} ({})", task.title, task.category);
        }
    }
    if !any {
        println!("Nothing scheduled.");
    }
    Ok(())
}
