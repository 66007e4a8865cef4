mod achievement;
mod note;
mod preset;
mod recipe;
mod stats;

pub use achievement::{Achievement, Requirement};
pub use note::{CulinaryNote, NoteCategory};
pub use preset::{TimerCategory, TimerPreset};
pub use recipe::{Difficulty, Recipe, RecipeCategory};
pub use stats::{day_token, UserStats};
