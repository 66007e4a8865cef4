use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserStats;

/// Unlock condition for an achievement, one integer threshold per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Requirement {
    RecipesViewed { count: u64 },
    NotesCreated { count: u64 },
    TimersUsed { count: u64 },
    DaysActive { count: u64 },
}

impl Requirement {
    /// Total match over the four variants.
    pub fn is_met(&self, stats: &UserStats) -> bool {
        match *self {
            Requirement::RecipesViewed { count } => stats.recipes_viewed >= count,
            Requirement::NotesCreated { count } => stats.notes_created >= count,
            Requirement::TimersUsed { count } => stats.timers_used >= count,
            Requirement::DaysActive { count } => stats.active_day_count() >= count,
        }
    }
}

/// A gamification badge.
///
/// Transitions locked -> unlocked exactly once; `unlocked_date` is set if
/// and only if `is_unlocked`. The only way back is a full progress reset,
/// which replaces the whole set with locked definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub is_unlocked: bool,
    pub unlocked_date: Option<DateTime<Utc>>,
    pub requirement: Requirement,
}

impl Achievement {
    /// A locked achievement with a fresh id.
    pub fn locked(
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        requirement: Requirement,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
            is_unlocked: false,
            unlocked_date: None,
            requirement,
        }
    }
}
