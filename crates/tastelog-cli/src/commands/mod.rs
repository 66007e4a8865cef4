pub mod achievements;
pub mod config;
pub mod note;
pub mod onboarding;
pub mod recipe;
pub mod stats;
pub mod timer;

use tastelog_core::{AppStore, Database, Event};

/// Open the application store over the on-disk database.
pub(crate) fn open_store() -> Result<AppStore, Box<dyn std::error::Error>> {
    let db = Database::open()?;
    Ok(AppStore::open(Box::new(db)))
}

/// Announce freshly unlocked achievements on stderr so they show up
/// regardless of which command earned them.
pub(crate) fn announce_unlocks(events: &[Event]) {
    for event in events {
        if let Event::AchievementUnlocked { title, .. } = event {
            eprintln!("Achievement unlocked: {title}");
        }
    }
}
