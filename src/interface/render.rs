use crate::models::{MealType, PantryItem, Recipe, RecipeMatch, ShoppingItem, Slot, Weekday};
use crate::planner::{ShoppingProgress, Suggestions};
use crate::state::{MealPlanStore, PantryInventory};

/// Display recipes in a compact table.
pub fn display_recipes<'a, I>(recipes: I, title: &str)
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let recipes: Vec<&Recipe> = recipes.into_iter().collect();
    if recipes.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} recipes) ===", title, recipes.len());
    println!();

    let max_title_len = recipes.iter().map(|r| r.title.chars().count()).max().unwrap_or(10);

    for recipe in &recipes {
        println!(
            "  [{:>3}] {:<width$}  {:>3} min | {:<6} | {} servings | {:.0} kcal | R$ {:.2}",
            recipe.id,
            recipe.title,
            recipe.cook_time,
            recipe.difficulty,
            recipe.servings,
            recipe.calories,
            recipe.price,
            width = max_title_len
        );
        if !recipe.tags.is_empty() {
            println!("        tags: {}", recipe.tags.join(", "));
        }
    }

    println!();
}

fn display_match(rank: usize, m: &RecipeMatch<'_>) {
    println!(
        "{:>3}. {} - {}% ({} of {} ingredients)",
        rank,
        m.recipe.title,
        m.match_percentage,
        m.available_ingredients.len(),
        m.recipe.ingredients.len()
    );
    if !m.available_ingredients.is_empty() {
        println!("       have:    {}", m.available_ingredients.join(", "));
    }
    if !m.missing_ingredients.is_empty() {
        println!("       missing: {}", m.missing_ingredients.join(", "));
    }
}

/// Display pantry-based suggestions, or the matching empty state.
pub fn display_suggestions(suggestions: &Suggestions<'_>) {
    println!();
    println!("=== Recipes With Your Ingredients ===");
    println!();

    match suggestions {
        Suggestions::EmptyPantry => {
            println!("No ingredients added yet.");
            println!("Add what you have at home to see what you can cook.");
        }
        Suggestions::NoMatches => {
            println!("No recipe uses the ingredients in your pantry.");
        }
        Suggestions::Ranked(matches) => {
            for (i, m) in matches.iter().enumerate() {
                display_match(i + 1, m);
            }
        }
    }

    println!();
}

/// Display the pantry grouped by category.
pub fn display_pantry(pantry: &PantryInventory) {
    println!();
    println!("=== My Pantry ({} items) ===", pantry.len());

    if pantry.is_empty() {
        println!();
        println!("  (empty)");
        println!();
        return;
    }

    for (category, items) in pantry.by_category() {
        println!();
        println!("  {} ({})", category, items.len());
        for item in items {
            println!("    - {}", item.name);
        }
    }

    println!();
}

/// Display a flat list of pantry items, e.g. search results.
pub fn display_pantry_items(items: &[&PantryItem]) {
    if items.is_empty() {
        println!("  (no items)");
        return;
    }
    for item in items {
        let category = item.effective_category();
        println!("  {} [{}] added {}", item.name, category, item.added_date.format("%Y-%m-%d"));
    }
}

/// Display the week, one block per day, grouped by meal type.
pub fn display_week(store: &MealPlanStore) {
    println!();
    println!("=== Weekly Plan ({} meals) ===", store.len());

    for day in Weekday::ALL {
        let day_meals = store.meals_on(day);
        println!();
        match day_meals.len() {
            0 => {
                println!("  {}", day);
                continue;
            }
            1 => println!("  {} (1 meal)", day),
            n => println!("  {} ({} meals)", day, n),
        }

        for meal_type in MealType::ALL {
            for meal in store.meals_in(Slot::new(day, meal_type)) {
                println!(
                    "    {:<9} {} ({} min) [{}]",
                    meal_type, meal.recipe.title, meal.recipe.cook_time, meal.id
                );
            }
        }
    }

    println!();
}

/// Display the consolidated shopping list with check marks.
pub fn display_shopping_list(items: &[ShoppingItem]) {
    println!();
    println!("=== Shopping List ===");

    if items.is_empty() {
        println!();
        println!("Your shopping list is empty.");
        println!("Add recipes to the weekly plan and their ingredients will show up here.");
        println!();
        return;
    }

    let progress = ShoppingProgress::of(items);
    println!(
        "{} of {} items checked ({}%)",
        progress.checked,
        progress.total,
        progress.percent()
    );
    println!();

    for item in items {
        let mark = if item.checked { "x" } else { " " };
        println!("  [{}] {}  <- {}", mark, item.name, item.recipes.join(", "));
    }

    println!();
}
