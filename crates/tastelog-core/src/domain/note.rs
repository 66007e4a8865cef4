use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteCategory {
    Experiment,
    Tip,
    Review,
    Idea,
    Technique,
}

impl std::fmt::Display for NoteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            NoteCategory::Experiment => "Experiment",
            NoteCategory::Tip => "Cooking Tip",
            NoteCategory::Review => "Recipe Review",
            NoteCategory::Idea => "Recipe Idea",
            NoteCategory::Technique => "Technique",
        };
        f.write_str(label)
    }
}

/// A user-authored cooking note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CulinaryNote {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub date_created: DateTime<Utc>,
    /// Stamped by the store on every edit. Always >= `date_created`.
    pub date_modified: DateTime<Utc>,
    pub category: NoteCategory,
}

impl CulinaryNote {
    /// Build a new note stamped with the current time.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyField`] when the title or content is
    /// blank after trimming.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: NoteCategory,
    ) -> Result<Self, ValidationError> {
        let now = Utc::now();
        let note = Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            date_created: now,
            date_modified: now,
            category,
        };
        note.validate()?;
        Ok(note)
    }

    /// Reject blank-after-trim title or content.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "title" });
        }
        if self.content.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "content" });
        }
        Ok(())
    }
}
