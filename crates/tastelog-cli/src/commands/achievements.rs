use clap::Subcommand;

use super::open_store;

#[derive(Subcommand)]
pub enum AchievementsAction {
    /// List achievements and their lock state
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: AchievementsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AchievementsAction::List { json } => {
            let store = open_store()?;
            if json {
                println!("{}", serde_json::to_string_pretty(store.achievements())?);
            } else {
                for achievement in store.achievements() {
                    let status = match achievement.unlocked_date {
                        Some(at) => format!("unlocked {}", at.format("%Y-%m-%d")),
                        None => "locked".to_string(),
                    };
                    println!(
                        "{}  {}  -- {} ({status})",
                        achievement.icon, achievement.title, achievement.description
                    );
                }
            }
        }
    }
    Ok(())
}
