use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerCategory {
    Boiling,
    Baking,
    Grilling,
    Steaming,
    General,
}

impl std::fmt::Display for TimerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TimerCategory::Boiling => "Boiling",
            TimerCategory::Baking => "Baking",
            TimerCategory::Grilling => "Grilling",
            TimerCategory::Steaming => "Steaming",
            TimerCategory::General => "General",
        };
        f.write_str(label)
    }
}

/// A built-in cooking timer preset. Seeded only, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerPreset {
    pub id: Uuid,
    pub name: String,
    /// Duration in seconds, always > 0 for seeded presets.
    pub duration_secs: u32,
    pub category: TimerCategory,
    /// Opaque glyph token shown by the UI.
    pub icon: String,
}
