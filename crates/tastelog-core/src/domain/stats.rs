use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Format a timestamp as a calendar-day token, e.g. `2025-10-09`.
///
/// Tokens are derived from UTC so that day membership is stable across
/// machine timezone changes.
pub fn day_token(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

/// Lifetime activity counters.
///
/// Counters only ever grow, except through [`UserStats::default`] on a full
/// progress reset. Every increment also records the current calendar day,
/// so `days_active` holds one token per distinct day with any activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    #[serde(default)]
    pub recipes_viewed: u64,
    #[serde(default)]
    pub notes_created: u64,
    #[serde(default)]
    pub timers_used: u64,
    #[serde(default)]
    pub days_active: BTreeSet<String>,
}

impl UserStats {
    pub fn increment_recipes_viewed(&mut self) {
        self.recipes_viewed += 1;
        self.touch_today();
    }

    pub fn increment_notes_created(&mut self) {
        self.notes_created += 1;
        self.touch_today();
    }

    pub fn increment_timers_used(&mut self) {
        self.timers_used += 1;
        self.touch_today();
    }

    /// Number of distinct calendar days with any tracked activity.
    pub fn active_day_count(&self) -> u64 {
        self.days_active.len() as u64
    }

    fn touch_today(&mut self) {
        self.days_active.insert(day_token(Utc::now()));
    }
}
