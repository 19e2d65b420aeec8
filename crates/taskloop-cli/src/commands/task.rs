//! Task management commands.

use std::collections::BTreeSet;
use std::error::Error;

use chrono::NaiveDate;
use clap::Subcommand;
use taskloop_core::{
    apply_filter, apply_unlocks, bucketize, check_task_achievements, recompute_tasks_completed,
    search_tasks, FilterSpec, Priority, Task,
};

use super::parse_date_or_today;
use crate::store::Store;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a new task
    Add {
        /// Task title
        title: String,
        /// Task description
        #[arg(long, default_value = "")]
        description: String,
        /// Category name (default: Personal)
        #[arg(long, default_value = "Personal")]
        category: String,
        /// Priority: low, medium, high, urgent
        #[arg(long, default_value = "medium")]
        priority: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },
    /// List tasks, optionally filtered and grouped by due bucket
    List {
        /// Only completed tasks
        #[arg(long)]
        completed: bool,
        /// Only incomplete tasks
        #[arg(long)]
        incomplete: bool,
        /// Filter by category (repeatable)
        #[arg(long)]
        category: Vec<String>,
        /// Group the result into Overdue/Today/This Week/This Month
        #[arg(long)]
        due_buckets: bool,
        /// Reference date for bucketing (YYYY-MM-DD, default: today)
        #[arg(long)]
        today: Option<String>,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Search tasks by title or description
    Search {
        /// Query text
        query: String,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Toggle a task's completion status
    Toggle {
        /// Task ID (unique prefix accepted)
        id: String,
    },
    /// Delete a task
    Rm {
        /// Task ID (unique prefix accepted)
        id: String,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn Error>> {
    let mut store = Store::open()?;

    match action {
        TaskAction::Add {
            title,
            description,
            category,
            priority,
            due,
        } => {
            let mut task = Task::new(title, category).with_description(description);
            task.priority = parse_priority(&priority)?;
            if let Some(due) = due {
                task.due_date = Some(NaiveDate::parse_from_str(&due, "%Y-%m-%d")?);
            }
            println!("Task created: {} ({})", task.title, task.id);
            store.data.tasks.push(task);
            store.save()?;
        }
        TaskAction::List {
            completed,
            incomplete,
            category,
            due_buckets,
            today,
            json,
        } => {
            let spec = FilterSpec {
                completed,
                incomplete,
                categories: category.into_iter().collect::<BTreeSet<_>>(),
            };
            let filtered = apply_filter(&store.data.tasks, &spec);
            if due_buckets {
                let today = parse_date_or_today(today.as_deref())?;
                let buckets = bucketize(&filtered, today);
                if json {
                    println!("{}", serde_json::to_string_pretty(&buckets)?);
                } else if buckets.is_empty() {
                    println!("No tasks due within thirty days.");
                } else {
                    for (bucket, tasks) in buckets.sections() {
                        println!("{}:", bucket.heading());
                        for task in tasks {
                            print_task(task);
                        }
                    }
                }
            } else if json {
                println!("{}", serde_json::to_string_pretty(&filtered)?);
            } else if filtered.is_empty() {
                println!("No tasks found.");
            } else {
                for task in &filtered {
                    print_task(task);
                }
            }
        }
        TaskAction::Search { query, json } => {
            let hits = search_tasks(&store.data.tasks, &query);
            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else if hits.is_empty() {
                println!("No tasks found.");
            } else {
                for task in &hits {
                    print_task(task);
                }
            }
        }
        TaskAction::Toggle { id } => {
            let idx = store
                .find_task(&id)
                .ok_or_else(|| format!("no task matching '{id}'"))?;
            store.data.tasks[idx].completed = !store.data.tasks[idx].completed;
            let task = &store.data.tasks[idx];
            println!(
                "{}: {}",
                if task.completed { "Completed" } else { "Reopened" },
                task.title
            );

            // Full recompute after every toggle, then fold in any new
            // unlocks; never delta-tracked.
            let count = recompute_tasks_completed(&store.data.tasks);
            let before = store.data.stats.unlocked_achievements.clone();
            let mut stats = store.data.stats.clone();
            stats.tasks_completed = count;
            stats = apply_unlocks(&stats, check_task_achievements(count));
            for id in stats.unlocked_achievements.difference(&before) {
                println!("Achievement unlocked: {id}");
            }
            store.data.stats = stats;
            store.save()?;
        }
        TaskAction::Rm { id } => {
            let idx = store
                .find_task(&id)
                .ok_or_else(|| format!("no task matching '{id}'"))?;
            let task = store.data.tasks.remove(idx);
            println!("Deleted: {}", task.title);
            // The count is derived from the task collection, so a deleted
            // completed task must drop out of it immediately.
            store.data.stats.tasks_completed = recompute_tasks_completed(&store.data.tasks);
            store.save()?;
        }
    }
    Ok(())
}

fn parse_priority(s: &str) -> Result<Priority, Box<dyn Error>> {
    match s.to_lowercase().as_str() {
        "low" => Ok(Priority::Low),
        "medium" => Ok(Priority::Medium),
        "high" => Ok(Priority::High),
        "urgent" => Ok(Priority::Urgent),
        other => Err(format!("unknown priority '{other}'").into()),
    }
}

fn print_task(task: &Task) {
    let mark = if task.completed { "x" } else { " " };
    let due = task
        .due_date
        .map(|d| format!(" due {d}"))
        .unwrap_or_default();
    println!(
        "  [{mark}] {} ({}, {:?}){due}  {}",
        task.title,
        task.category,
        task.priority,
        &task.id[..task.id.len().min(8)]
    );
}
