//! Pomodoro timer commands.

use std::error::Error;
use std::io::Write;
use std::time::Duration;

use clap::{Args, Subcommand};
use taskloop_core::{format_hms, PhaseChange, PomodoroConfig, PomodoroTimer};

use crate::store::Store;

#[derive(Args)]
pub struct TimerOpts {
    /// Work duration in minutes
    #[arg(long)]
    work: Option<u32>,
    /// Break duration in minutes
    #[arg(long = "break")]
    break_minutes: Option<u32>,
    /// Number of work cycles
    #[arg(long)]
    cycles: Option<u32>,
}

#[derive(Subcommand)]
pub enum TimerAction {
    /// Show the configured phase schedule
    Plan(TimerOpts),
    /// Save timer settings as the default
    Set(TimerOpts),
    /// Run the timer in the foreground
    Run(TimerOpts),
}

impl TimerOpts {
    /// Overlay CLI flags on the stored configuration.
    fn merge(&self, base: PomodoroConfig) -> PomodoroConfig {
        PomodoroConfig {
            work_minutes: self.work.unwrap_or(base.work_minutes),
            break_minutes: self.break_minutes.unwrap_or(base.break_minutes),
            cycles: self.cycles.unwrap_or(base.cycles),
        }
    }
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn Error>> {
    let mut store = Store::open()?;

    match action {
        TimerAction::Plan(opts) => {
            let config = opts.merge(store.data.timer);
            config.validate()?;
            print_plan(&config);
        }
        TimerAction::Set(opts) => {
            let config = opts.merge(store.data.timer);
            config.validate()?;
            store.data.timer = config;
            store.save()?;
            println!(
                "Timer set: {} min work / {} min break, {} cycles",
                config.work_minutes, config.break_minutes, config.cycles
            );
        }
        TimerAction::Run(opts) => {
            let config = opts.merge(store.data.timer);
            let mut timer = PomodoroTimer::new(config)?;
            timer.start();
            run_loop(&mut timer)?;
        }
    }
    Ok(())
}

fn print_plan(config: &PomodoroConfig) {
    for cycle in 1..=config.cycles {
        println!(
            "Cycle {cycle}/{}: Work {}",
            config.cycles,
            format_hms(config.work_secs())
        );
        if cycle < config.cycles {
            println!("            Break {}", format_hms(config.break_secs()));
        }
    }
}

fn run_loop(timer: &mut PomodoroTimer) -> Result<(), Box<dyn Error>> {
    println!(
        "{} - cycle {}/{}",
        timer.phase().label(),
        timer.cycle(),
        timer.config().cycles
    );
    loop {
        print!("\r{}   ", format_hms(timer.remaining_secs()));
        std::io::stdout().flush()?;
        std::thread::sleep(Duration::from_secs(1));
        for change in timer.tick(1) {
            println!();
            match change {
                PhaseChange::BreakStarted { cycle } => {
                    println!("Break Time - cycle {cycle}/{}", timer.config().cycles);
                }
                PhaseChange::WorkStarted { cycle } => {
                    println!("Work Time - cycle {cycle}/{}", timer.config().cycles);
                }
                PhaseChange::Completed => {
                    println!("Session complete.");
                    return Ok(());
                }
            }
        }
    }
}
