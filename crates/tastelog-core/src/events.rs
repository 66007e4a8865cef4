use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::timer::TimerState;

/// Every externally observable state change produces an Event.
/// The UI layer polls for events and renders them (alerts, badges, sounds).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        label: String,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerResumed {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// Remaining time was adjusted while idle or paused.
    TimerAdjusted {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// Manual stop; no completion signal is emitted for this.
    TimerStopped {
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    /// The countdown ran to zero. Emitted exactly once per run.
    TimerFinished {
        label: String,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        label: String,
        remaining_secs: u32,
        duration_secs: u32,
        progress: f64,
        at: DateTime<Utc>,
    },
    /// A locked achievement met its requirement.
    AchievementUnlocked {
        id: Uuid,
        title: String,
        at: DateTime<Utc>,
    },
}
