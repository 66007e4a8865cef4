use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeCategory {
    Appetizer,
    MainCourse,
    Dessert,
    Beverage,
    Snack,
}

impl std::fmt::Display for RecipeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RecipeCategory::Appetizer => "Appetizer",
            RecipeCategory::MainCourse => "Main Course",
            RecipeCategory::Dessert => "Dessert",
            RecipeCategory::Beverage => "Beverage",
            RecipeCategory::Snack => "Snack",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

/// A recipe from the built-in catalog.
///
/// Recipes are seeded once at store initialization and never mutated;
/// there is no user-authored recipe flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    /// Preparation time in minutes.
    pub prep_time_min: u32,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub category: RecipeCategory,
    pub difficulty: Difficulty,
}
