use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tastelog-cli", version, about = "TasteLog CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the recipe catalog
    Recipe {
        #[command(subcommand)]
        action: commands::recipe::RecipeAction,
    },
    /// Cooking notes
    Note {
        #[command(subcommand)]
        action: commands::note::NoteAction,
    },
    /// Cooking timers
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Activity statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Gamification badges
    Achievements {
        #[command(subcommand)]
        action: commands::achievements::AchievementsAction,
    },
    /// Onboarding state
    Onboarding {
        #[command(subcommand)]
        action: commands::onboarding::OnboardingAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Recipe { action } => commands::recipe::run(action),
        Commands::Note { action } => commands::note::run(action),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Achievements { action } => commands::achievements::run(action),
        Commands::Onboarding { action } => commands::onboarding::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
