use clap::{Parser, Subcommand};

mod commands;
mod store;

#[derive(Parser)]
#[command(name = "taskloop", version, about = "Taskloop CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Record a daily login and update the streak
    Login {
        /// Login date (YYYY-MM-DD, default: today)
        #[arg(long)]
        today: Option<String>,
    },
    /// Achievement catalog and unlock state
    Achievements {
        #[command(subcommand)]
        action: commands::achievements::AchievementsAction,
    },
    /// Calendar agenda view
    Agenda {
        /// Anchor date (YYYY-MM-DD, default: today)
        #[arg(long)]
        anchor: Option<String>,
    },
    /// Pomodoro timer
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Task { action } => commands::task::run(action),
        Commands::Login { today } => commands::login::run(today),
        Commands::Achievements { action } => commands::achievements::run(action),
        Commands::Agenda { anchor } => commands::agenda::run(anchor),
        Commands::Timer { action } => commands::timer::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
