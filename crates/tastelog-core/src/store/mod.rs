//! The application store.
//!
//! One process-wide [`AppStore`] owns every mutable collection: recipes,
//! notes, timer presets, achievements, stats, and the onboarding flag. UI
//! collaborators call its mutation operations; the store updates memory,
//! re-evaluates achievements when counters changed, and persists the
//! affected subset through the [`Gateway`].
//!
//! Persistence is a side effect of mutation, not a precondition for it:
//! gateway failures are logged and swallowed, and in-memory state is never
//! rolled back. The worst-case failure mode is losing persisted state
//! across restarts.

mod seed;

use std::collections::HashSet;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::achievements;
use crate::domain::{Achievement, CulinaryNote, Recipe, TimerPreset, UserStats};
use crate::error::ValidationError;
use crate::events::Event;
use crate::storage::Gateway;

const STATS_KEY: &str = "user_stats";
const NOTES_KEY: &str = "culinary_notes";
const ONBOARDING_KEY: &str = "onboarding_complete";

/// Single authoritative holder of in-memory application state.
pub struct AppStore {
    gateway: Box<dyn Gateway>,
    recipes: Vec<Recipe>,
    notes: Vec<CulinaryNote>,
    presets: Vec<TimerPreset>,
    achievements: Vec<Achievement>,
    stats: UserStats,
    onboarding_complete: bool,
}

impl AppStore {
    /// Initialize the store: seed built-in recipes, presets, and locked
    /// achievements, then overlay persisted user data from the gateway.
    ///
    /// Absent or undecodable stored values fall back to defaults; opening
    /// never fails.
    pub fn open(gateway: Box<dyn Gateway>) -> Self {
        let stats: UserStats = load_or_default(gateway.as_ref(), STATS_KEY);
        let persisted_notes: Vec<CulinaryNote> = load_or_default(gateway.as_ref(), NOTES_KEY);
        let onboarding_complete: bool = load_or_default(gateway.as_ref(), ONBOARDING_KEY);

        Self {
            gateway,
            recipes: seed::recipes(),
            notes: merge_notes(persisted_notes, seed::sample_notes()),
            presets: seed::presets(),
            achievements: achievements::defaults(),
            stats,
            onboarding_complete,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn recipe(&self, id: Uuid) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn notes(&self) -> &[CulinaryNote] {
        &self.notes
    }

    pub fn note(&self, id: Uuid) -> Option<&CulinaryNote> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn presets(&self) -> &[TimerPreset] {
        &self.presets
    }

    pub fn preset(&self, id: Uuid) -> Option<&TimerPreset> {
        self.presets.iter().find(|p| p.id == id)
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn stats(&self) -> &UserStats {
        &self.stats
    }

    pub fn onboarding_complete(&self) -> bool {
        self.onboarding_complete
    }

    // ── Notes ────────────────────────────────────────────────────────

    /// Insert a note at the front of the collection (most-recent-first is
    /// a display contract), bump `notes_created`, re-evaluate
    /// achievements, and persist stats and notes.
    ///
    /// Returns any [`Event::AchievementUnlocked`] produced by the bump.
    ///
    /// # Errors
    /// Rejects notes whose title or content is blank after trimming;
    /// nothing is mutated on rejection.
    pub fn add_note(&mut self, note: CulinaryNote) -> Result<Vec<Event>, ValidationError> {
        note.validate()?;
        self.notes.insert(0, note);
        self.stats.increment_notes_created();
        let events = self.refresh_achievements();
        self.persist(STATS_KEY, &self.stats);
        self.persist(NOTES_KEY, &self.notes);
        Ok(events)
    }

    /// Replace the note matching `note.id` in place, preserving list
    /// position and `date_created`, stamping `date_modified`. Stats are
    /// untouched. Silent no-op when the id is unknown.
    ///
    /// # Errors
    /// Same emptiness validation as [`AppStore::add_note`].
    pub fn update_note(&mut self, note: CulinaryNote) -> Result<(), ValidationError> {
        note.validate()?;
        if let Some(slot) = self.notes.iter_mut().find(|n| n.id == note.id) {
            let date_created = slot.date_created;
            *slot = note;
            slot.date_created = date_created;
            slot.date_modified = Utc::now();
            self.persist(NOTES_KEY, &self.notes);
        }
        Ok(())
    }

    /// Remove the note with the given id if present. Silent no-op
    /// otherwise.
    pub fn delete_note(&mut self, id: Uuid) {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() != before {
            self.persist(NOTES_KEY, &self.notes);
        }
    }

    // ── Stats ────────────────────────────────────────────────────────

    /// Record one recipe-detail view. Views are counted unconditionally;
    /// repeat views of the same recipe count again.
    pub fn increment_recipes_viewed(&mut self) -> Vec<Event> {
        self.stats.increment_recipes_viewed();
        let events = self.refresh_achievements();
        self.persist(STATS_KEY, &self.stats);
        events
    }

    /// Record one timer start (preset-based or custom).
    pub fn increment_timers_used(&mut self) -> Vec<Event> {
        self.stats.increment_timers_used();
        let events = self.refresh_achievements();
        self.persist(STATS_KEY, &self.stats);
        events
    }

    // ── Onboarding & reset ───────────────────────────────────────────

    pub fn complete_onboarding(&mut self) {
        self.onboarding_complete = true;
        self.persist(ONBOARDING_KEY, &self.onboarding_complete);
    }

    /// Wipe stats, relock all achievements, and clear the onboarding
    /// flag. User notes are kept.
    pub fn reset_progress(&mut self) {
        self.stats = UserStats::default();
        self.onboarding_complete = false;
        self.achievements = achievements::defaults();
        self.persist(STATS_KEY, &self.stats);
        self.persist(ONBOARDING_KEY, &self.onboarding_complete);
        self.persist(NOTES_KEY, &self.notes);
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn refresh_achievements(&mut self) -> Vec<Event> {
        let now = Utc::now();
        let updated = achievements::evaluate(&self.stats, &self.achievements, now);
        let events = updated
            .iter()
            .zip(&self.achievements)
            .filter(|(after, before)| after.is_unlocked && !before.is_unlocked)
            .map(|(after, _)| Event::AchievementUnlocked {
                id: after.id,
                title: after.title.clone(),
                at: now,
            })
            .collect();
        self.achievements = updated;
        events
    }

    /// Best-effort write-through. Failures never propagate to the caller
    /// and never roll back in-memory state.
    fn persist<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(blob) => {
                if let Err(e) = self.gateway.save(key, &blob) {
                    tracing::warn!(key, error = %e, "failed to persist; keeping in-memory state");
                }
            }
            Err(e) => tracing::warn!(key, error = %e, "failed to encode value for persistence"),
        }
    }
}

fn load_or_default<T: DeserializeOwned + Default>(gateway: &dyn Gateway, key: &str) -> T {
    match gateway.load(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding undecodable stored value");
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read stored value");
            T::default()
        }
    }
}

/// Persisted notes come first; sample notes whose ids collide with a
/// persisted note are dropped.
fn merge_notes(persisted: Vec<CulinaryNote>, samples: Vec<CulinaryNote>) -> Vec<CulinaryNote> {
    let seen: HashSet<Uuid> = persisted.iter().map(|n| n.id).collect();
    let mut notes = persisted;
    notes.extend(samples.into_iter().filter(|n| !seen.contains(&n.id)));
    notes
}
