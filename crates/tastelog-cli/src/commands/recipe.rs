use clap::Subcommand;

use super::{announce_unlocks, open_store};

#[derive(Subcommand)]
pub enum RecipeAction {
    /// List the recipe catalog
    List {
        /// Filter by category (e.g. "dessert", "main course")
        #[arg(long)]
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one recipe in full and record the view
    Show {
        /// 1-based index into the catalog listing
        index: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: RecipeAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RecipeAction::List { category, json } => {
            let store = open_store()?;
            let recipes: Vec<_> = store
                .recipes()
                .iter()
                .filter(|r| match &category {
                    Some(wanted) => r.category.to_string().eq_ignore_ascii_case(wanted),
                    None => true,
                })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&recipes)?);
            } else {
                for (i, recipe) in recipes.iter().enumerate() {
                    println!(
                        "{:2}. {} [{} / {}] -- {} min",
                        i + 1,
                        recipe.title,
                        recipe.category,
                        recipe.difficulty,
                        recipe.prep_time_min
                    );
                }
            }
        }
        RecipeAction::Show { index, json } => {
            let mut store = open_store()?;
            let recipe = index
                .checked_sub(1)
                .and_then(|i| store.recipes().get(i))
                .ok_or_else(|| format!("no recipe at index {index}"))?
                .clone();

            if json {
                println!("{}", serde_json::to_string_pretty(&recipe)?);
            } else {
                println!("{} ({}, {})", recipe.title, recipe.category, recipe.difficulty);
                println!("Prep time: {} min", recipe.prep_time_min);
                println!("\n{}\n", recipe.description);
                println!("Ingredients:");
                for ingredient in &recipe.ingredients {
                    println!("  - {ingredient}");
                }
                println!("\nSteps:");
                for (i, step) in recipe.steps.iter().enumerate() {
                    println!("  {}. {step}", i + 1);
                }
            }

            // Each opened detail view counts, repeat views included.
            let events = store.increment_recipes_viewed();
            announce_unlocks(&events);
        }
    }
    Ok(())
}
