use clap::Subcommand;

use super::open_store;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Show activity counters
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Reset all progress (keeps notes)
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        StatsAction::Show { json } => {
            let store = open_store()?;
            let stats = store.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(stats)?);
            } else {
                println!("Recipes viewed: {}", stats.recipes_viewed);
                println!("Notes created: {}", stats.notes_created);
                println!("Timers used:   {}", stats.timers_used);
                println!("Active days:   {}", stats.active_day_count());
            }
        }
        StatsAction::Reset { yes } => {
            if !yes {
                return Err("this wipes stats, achievements, and onboarding; pass --yes to confirm".into());
            }
            let mut store = open_store()?;
            store.reset_progress();
            println!("Progress reset. Notes were kept.");
        }
    }
    Ok(())
}
