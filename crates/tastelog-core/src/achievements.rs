//! Achievement evaluation.
//!
//! A pure decision procedure run by the store after every stats mutation:
//! each locked achievement is checked against current counters and
//! unlocked with a timestamp when its requirement is met. Unlocked
//! achievements are never re-evaluated or re-stamped.

use chrono::{DateTime, Utc};

use crate::domain::{Achievement, Requirement, UserStats};

/// The built-in achievement set, all locked.
pub fn defaults() -> Vec<Achievement> {
    vec![
        Achievement::locked(
            "Recipe Explorer",
            "View your first 5 recipes",
            "\u{1F50D}",
            Requirement::RecipesViewed { count: 5 },
        ),
        Achievement::locked(
            "Master of Flavor",
            "Create 10 cooking notes",
            "\u{1F468}\u{200D}\u{1F373}",
            Requirement::NotesCreated { count: 10 },
        ),
        Achievement::locked(
            "Timekeeper Chef",
            "Use timers 15 times",
            "\u{23F0}",
            Requirement::TimersUsed { count: 15 },
        ),
        Achievement::locked(
            "Dedicated Cook",
            "Cook for 7 different days",
            "\u{1F3C6}",
            Requirement::DaysActive { count: 7 },
        ),
    ]
}

/// Evaluate `achievements` against `stats`, unlocking what newly qualifies.
///
/// Returns the updated set; entries already unlocked pass through
/// untouched. Evaluation order is irrelevant -- each achievement is
/// independent and unlocks at most once.
pub fn evaluate(
    stats: &UserStats,
    achievements: &[Achievement],
    now: DateTime<Utc>,
) -> Vec<Achievement> {
    achievements
        .iter()
        .map(|achievement| {
            if !achievement.is_unlocked && achievement.requirement.is_met(stats) {
                let mut unlocked = achievement.clone();
                unlocked.is_unlocked = true;
                unlocked.unlocked_date = Some(now);
                unlocked
            } else {
                achievement.clone()
            }
        })
        .collect()
}
