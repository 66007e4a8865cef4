//! Built-in seed data: the recipe catalog, timer presets, and the sample
//! notes a fresh install starts with.

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::{
    CulinaryNote, Difficulty, NoteCategory, Recipe, RecipeCategory, TimerCategory, TimerPreset,
};

fn recipe(
    title: &str,
    prep_time_min: u32,
    description: &str,
    ingredients: &[&str],
    steps: &[&str],
    category: RecipeCategory,
    difficulty: Difficulty,
) -> Recipe {
    Recipe {
        id: Uuid::new_v4(),
        title: title.into(),
        prep_time_min,
        description: description.into(),
        ingredients: ingredients.iter().map(|s| (*s).into()).collect(),
        steps: steps.iter().map(|s| (*s).into()).collect(),
        category,
        difficulty,
    }
}

pub(crate) fn recipes() -> Vec<Recipe> {
    vec![
        recipe(
            "Creamy Mushroom Pasta",
            25,
            "Rich and creamy pasta with sauteed mushrooms and herbs",
            &[
                "400g pasta (penne or fettuccine)",
                "300g mixed mushrooms, sliced",
                "200ml heavy cream",
                "3 cloves garlic, minced",
                "1 onion, diced",
                "50g parmesan cheese, grated",
                "2 tbsp olive oil",
                "Fresh thyme and parsley",
                "Salt and pepper to taste",
            ],
            &[
                "Cook pasta according to package instructions until al dente",
                "Heat olive oil in a large pan over medium heat",
                "Saute onion and garlic until fragrant",
                "Add mushrooms and cook until golden brown",
                "Pour in cream and simmer for 3-4 minutes",
                "Add cooked pasta and toss with sauce",
                "Stir in parmesan cheese and fresh herbs",
                "Season with salt and pepper, serve immediately",
            ],
            RecipeCategory::MainCourse,
            Difficulty::Medium,
        ),
        recipe(
            "Spicy Chicken Wings",
            45,
            "Crispy baked wings with a spicy buffalo sauce glaze",
            &[
                "1kg chicken wings",
                "3 tbsp hot sauce",
                "2 tbsp butter",
                "1 tbsp honey",
                "1 tsp garlic powder",
                "1 tsp paprika",
                "1/2 tsp cayenne pepper",
                "Salt and pepper",
            ],
            &[
                "Preheat oven to 220C",
                "Pat wings dry and season with salt, pepper, and spices",
                "Arrange on baking sheet lined with parchment",
                "Bake for 25-30 minutes until crispy",
                "Mix hot sauce, butter, and honey in a bowl",
                "Toss cooked wings in sauce mixture",
                "Return to oven for 5 more minutes",
                "Serve hot with celery sticks",
            ],
            RecipeCategory::Appetizer,
            Difficulty::Easy,
        ),
        recipe(
            "Chocolate Lava Cake",
            20,
            "Decadent individual chocolate cakes with molten centers",
            &[
                "100g dark chocolate, chopped",
                "100g butter",
                "2 large eggs",
                "2 egg yolks",
                "60g caster sugar",
                "2 tbsp plain flour",
                "Butter for ramekins",
                "Cocoa powder for dusting",
            ],
            &[
                "Preheat oven to 200C",
                "Butter 4 ramekins and dust with cocoa powder",
                "Melt chocolate and butter in double boiler",
                "Whisk eggs, yolks, and sugar until thick",
                "Fold in melted chocolate mixture",
                "Sift in flour and fold gently",
                "Divide between ramekins",
                "Bake for 12-14 minutes until edges are firm",
                "Let cool for 1 minute, then invert onto plates",
            ],
            RecipeCategory::Dessert,
            Difficulty::Medium,
        ),
        recipe(
            "Fresh Garden Salad",
            15,
            "Crisp mixed greens with seasonal vegetables and vinaigrette",
            &[
                "Mixed salad greens (200g)",
                "1 cucumber, sliced",
                "2 tomatoes, wedged",
                "1 red onion, thinly sliced",
                "1 bell pepper, strips",
                "3 tbsp olive oil",
                "1 tbsp balsamic vinegar",
                "1 tsp Dijon mustard",
                "Salt and pepper",
            ],
            &[
                "Wash and dry all vegetables thoroughly",
                "Tear lettuce into bite-sized pieces",
                "Slice cucumber and tomatoes",
                "Arrange vegetables in a large bowl",
                "Whisk olive oil, vinegar, and mustard",
                "Season dressing with salt and pepper",
                "Drizzle dressing over salad just before serving",
                "Toss gently and serve immediately",
            ],
            RecipeCategory::Appetizer,
            Difficulty::Easy,
        ),
        recipe(
            "Beef Stir Fry",
            30,
            "Quick and flavorful beef with crisp vegetables in savory sauce",
            &[
                "500g beef sirloin, sliced thin",
                "2 bell peppers, strips",
                "1 broccoli head, florets",
                "2 carrots, julienned",
                "3 tbsp soy sauce",
                "2 tbsp oyster sauce",
                "1 tbsp cornstarch",
                "2 tbsp vegetable oil",
                "2 cloves garlic, minced",
                "1 inch ginger, grated",
            ],
            &[
                "Marinate beef in soy sauce and cornstarch for 15 minutes",
                "Heat oil in wok or large pan over high heat",
                "Stir-fry beef until browned, remove and set aside",
                "Add vegetables to pan, stir-fry for 3-4 minutes",
                "Add garlic and ginger, cook for 30 seconds",
                "Return beef to pan with oyster sauce",
                "Toss everything together for 1-2 minutes",
                "Serve immediately over steamed rice",
            ],
            RecipeCategory::MainCourse,
            Difficulty::Medium,
        ),
        recipe(
            "Margherita Pizza",
            90,
            "Classic Italian pizza with fresh mozzarella, basil, and tomato sauce",
            &[
                "500g pizza dough",
                "200ml tomato sauce",
                "250g fresh mozzarella, sliced",
                "Fresh basil leaves",
                "2 tbsp olive oil",
                "2 cloves garlic, minced",
                "Salt and pepper",
                "Flour for dusting",
            ],
            &[
                "Preheat oven to 250C with pizza stone",
                "Roll out dough on floured surface",
                "Mix tomato sauce with garlic and seasoning",
                "Spread sauce evenly on dough",
                "Add mozzarella slices",
                "Drizzle with olive oil",
                "Bake for 10-12 minutes until golden",
                "Top with fresh basil before serving",
            ],
            RecipeCategory::MainCourse,
            Difficulty::Hard,
        ),
        recipe(
            "Chicken Tikka Masala",
            45,
            "Tender chicken in creamy spiced tomato sauce",
            &[
                "600g chicken breast, cubed",
                "200ml Greek yogurt",
                "400ml coconut milk",
                "400g canned tomatoes",
                "1 onion, diced",
                "3 cloves garlic, minced",
                "1 inch ginger, grated",
                "2 tsp garam masala",
                "1 tsp turmeric",
                "1 tsp paprika",
                "2 tbsp vegetable oil",
            ],
            &[
                "Marinate chicken in yogurt and spices for 30 minutes",
                "Cook chicken in oil until browned, set aside",
                "Saute onion, garlic, and ginger until soft",
                "Add spices and cook for 1 minute",
                "Add tomatoes and simmer for 10 minutes",
                "Stir in coconut milk and return chicken",
                "Simmer for 15 minutes until thick",
                "Serve with rice and naan bread",
            ],
            RecipeCategory::MainCourse,
            Difficulty::Medium,
        ),
        recipe(
            "Sushi Rolls",
            60,
            "Fresh salmon and avocado sushi rolls with sushi rice",
            &[
                "2 cups sushi rice",
                "4 nori sheets",
                "200g fresh salmon, sliced",
                "1 avocado, sliced",
                "1 cucumber, julienned",
                "3 tbsp rice vinegar",
                "1 tbsp sugar",
                "1 tsp salt",
                "Wasabi",
                "Soy sauce",
                "Pickled ginger",
                "Sesame seeds",
            ],
            &[
                "Cook sushi rice according to package",
                "Season rice with vinegar, sugar, and salt",
                "Let rice cool to room temperature",
                "Place nori on bamboo mat",
                "Spread rice evenly on nori",
                "Add salmon, avocado, and cucumber",
                "Roll tightly using bamboo mat",
                "Slice with sharp knife and serve",
            ],
            RecipeCategory::MainCourse,
            Difficulty::Hard,
        ),
        recipe(
            "Tiramisu",
            30,
            "Classic Italian dessert with coffee-soaked ladyfingers and mascarpone",
            &[
                "6 egg yolks",
                "150g sugar",
                "500g mascarpone cheese",
                "400ml strong coffee, cooled",
                "3 tbsp coffee liqueur",
                "2 packages ladyfinger cookies",
                "Cocoa powder for dusting",
                "Dark chocolate, grated",
            ],
            &[
                "Whisk egg yolks and sugar until thick",
                "Fold in mascarpone until smooth",
                "Mix coffee with liqueur in shallow dish",
                "Quickly dip ladyfingers in coffee mixture",
                "Layer dipped cookies in serving dish",
                "Spread half the mascarpone mixture",
                "Repeat layers, ending with mascarpone",
                "Chill 4 hours, dust with cocoa before serving",
            ],
            RecipeCategory::Dessert,
            Difficulty::Medium,
        ),
        recipe(
            "Smoothie Bowl",
            10,
            "Healthy acai smoothie bowl with fresh fruits and granola",
            &[
                "1 frozen acai packet",
                "1 frozen banana",
                "1/2 cup frozen berries",
                "1/4 cup almond milk",
                "1 tbsp honey",
                "Fresh strawberries, sliced",
                "Fresh blueberries",
                "Granola",
                "Coconut flakes",
                "Chia seeds",
                "Mint leaves",
            ],
            &[
                "Blend acai, banana, berries with almond milk",
                "Add honey and blend until thick",
                "Pour into serving bowl",
                "Arrange fresh fruits on top",
                "Sprinkle with granola and coconut",
                "Add chia seeds for extra nutrition",
                "Garnish with fresh mint",
                "Serve immediately",
            ],
            RecipeCategory::Snack,
            Difficulty::Easy,
        ),
    ]
}

fn preset(name: &str, duration_secs: u32, category: TimerCategory, icon: &str) -> TimerPreset {
    TimerPreset {
        id: Uuid::new_v4(),
        name: name.into(),
        duration_secs,
        category,
        icon: icon.into(),
    }
}

pub(crate) fn presets() -> Vec<TimerPreset> {
    vec![
        preset("Soft Boiled Eggs", 420, TimerCategory::Boiling, "\u{1F95A}"),
        preset("Hard Boiled Eggs", 600, TimerCategory::Boiling, "\u{1F95A}"),
        preset("Perfect Pasta", 480, TimerCategory::Boiling, "\u{1F35D}"),
        preset("Steamed Vegetables", 300, TimerCategory::Steaming, "\u{1F966}"),
        preset("Chocolate Chip Cookies", 720, TimerCategory::Baking, "\u{1F36A}"),
        preset("Pizza Dough Rise", 3600, TimerCategory::General, "\u{1F355}"),
        preset("Grilled Chicken Breast", 900, TimerCategory::Grilling, "\u{1F357}"),
        preset("Rice Cooking", 1080, TimerCategory::General, "\u{1F35A}"),
        preset("Bread Baking", 1800, TimerCategory::Baking, "\u{1F35E}"),
        preset("Tea Steeping", 180, TimerCategory::General, "\u{1F375}"),
    ]
}

// Sample notes carry stable ids so that, once the collection has been
// persisted, the saved copies win the id-collision merge on the next
// launch instead of duplicating.
fn sample_note(
    id: u128,
    title: &str,
    content: &str,
    days_ago: i64,
    category: NoteCategory,
) -> CulinaryNote {
    let at = Utc::now() - Duration::days(days_ago);
    CulinaryNote {
        id: Uuid::from_u128(id),
        title: title.into(),
        content: content.into(),
        date_created: at,
        date_modified: at,
        category,
    }
}

pub(crate) fn sample_notes() -> Vec<CulinaryNote> {
    vec![
        sample_note(
            1,
            "Perfect Pasta Water",
            "Always salt your pasta water generously - it should taste like seawater. \
             This is your only chance to season the pasta itself. Save some pasta water \
             before draining; the starchy water helps bind sauces beautifully.",
            5,
            NoteCategory::Tip,
        ),
        sample_note(
            2,
            "Mushroom Experiment",
            "Tried adding shiitake mushrooms to the creamy pasta recipe today. The earthy \
             flavor was incredible! Next time I'll use a mix of shiitake and oyster \
             mushrooms for even more depth. Also discovered that letting mushrooms cook \
             undisturbed for the first 3-4 minutes creates better browning.",
            3,
            NoteCategory::Experiment,
        ),
        sample_note(
            3,
            "Spice Blend Discovery",
            "Created an amazing spice blend for chicken: 2 parts paprika, 1 part garlic \
             powder, 1 part onion powder, 1/2 part cayenne, 1/4 part cinnamon. The \
             cinnamon adds unexpected warmth without being sweet. Perfect for wings and \
             grilled chicken.",
            7,
            NoteCategory::Technique,
        ),
        sample_note(
            4,
            "Chocolate Cake Success",
            "Finally mastered the lava cake! The secret is slightly underbaking - 12 \
             minutes at 200C is perfect. The centers should still jiggle slightly when \
             you shake the ramekin. Serving immediately is crucial; they firm up quickly \
             as they cool.",
            1,
            NoteCategory::Review,
        ),
    ]
}
