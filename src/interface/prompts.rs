use std::sync::Arc;

use dialoguer::{Confirm, Input, Select};

use crate::catalog::{RecipeCatalog, RecipeFilter, TitleLookup};
use crate::error::Result;
use crate::models::{
    IngredientCategory, MealId, MealType, PantryItemId, Recipe, ShoppingItem, Weekday,
};
use crate::state::{MealPlanStore, PantryInventory};

/// Pick one entry from a menu and return its index.
pub fn prompt_select(prompt: &str, items: &[String], default: usize) -> Result<usize> {
    Ok(Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()?)
}

/// Prompt for free text; may come back empty when `allow_empty`.
pub fn prompt_text(prompt: &str, allow_empty: bool) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(allow_empty)
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Choose a catalog filter.
pub fn prompt_filter() -> Result<RecipeFilter> {
    let options: Vec<String> = RecipeFilter::ALL.iter().map(|f| f.label().to_string()).collect();
    let selection = prompt_select("Filter recipes", &options, 0)?;
    Ok(RecipeFilter::ALL[selection])
}

/// Look a recipe up by title with fuzzy matching.
///
/// Returns `None` when the user gives up or nothing resembles the input.
pub fn prompt_recipe(catalog: &RecipeCatalog) -> Result<Option<Arc<Recipe>>> {
    let input = prompt_text("Recipe title (or press Enter to cancel)", true)?;
    if input.is_empty() {
        return Ok(None);
    }

    match catalog.find_by_title(&input) {
        TitleLookup::Exact(recipe) => Ok(Some(Arc::clone(recipe))),
        TitleLookup::NotFound => {
            println!("No matching recipe found for '{}'", input);
            Ok(None)
        }
        TitleLookup::Candidates(candidates) if candidates.len() == 1 => {
            let recipe = candidates[0];
            let confirm = prompt_yes_no(&format!("Did you mean '{}'?", recipe.title), true)?;
            Ok(confirm.then(|| Arc::clone(recipe)))
        }
        TitleLookup::Candidates(candidates) => {
            let mut options: Vec<String> = candidates.iter().map(|r| r.title.clone()).collect();
            options.push("None of these".to_string());

            let selection = prompt_select("Which did you mean?", &options, 0)?;
            Ok(candidates.get(selection).map(|&r| Arc::clone(r)))
        }
    }
}

pub fn prompt_weekday(current: Weekday) -> Result<Weekday> {
    let options: Vec<String> = Weekday::ALL.iter().map(|d| d.to_string()).collect();
    let default = Weekday::ALL.iter().position(|&d| d == current).unwrap_or(0);
    let selection = prompt_select("Move to which day?", &options, default)?;
    Ok(Weekday::ALL[selection])
}

pub fn prompt_meal_type(current: MealType) -> Result<MealType> {
    let options: Vec<String> = MealType::ALL.iter().map(|m| m.to_string()).collect();
    let default = MealType::ALL.iter().position(|&m| m == current).unwrap_or(0);
    let selection = prompt_select("Which meal?", &options, default)?;
    Ok(MealType::ALL[selection])
}

/// Choose an ingredient category, or none.
pub fn prompt_category() -> Result<Option<IngredientCategory>> {
    let mut options: Vec<String> = IngredientCategory::ALL.iter().map(|c| c.to_string()).collect();
    options.push("No category".to_string());

    let selection = prompt_select("Category", &options, 0)?;
    Ok(IngredientCategory::ALL.get(selection).copied())
}

/// Choose one of the planned meals.
pub fn prompt_meal(store: &MealPlanStore) -> Result<Option<MealId>> {
    if store.is_empty() {
        println!("No meals planned yet.");
        return Ok(None);
    }

    let mut options: Vec<String> = store
        .list()
        .iter()
        .map(|m| format!("{} - {} {}", m.recipe.title, m.day, m.meal_type))
        .collect();
    options.push("Cancel".to_string());

    let selection = prompt_select("Which meal?", &options, 0)?;
    Ok(store.list().get(selection).map(|m| m.id))
}

/// Choose one of the pantry items.
pub fn prompt_pantry_item(pantry: &PantryInventory) -> Result<Option<PantryItemId>> {
    if pantry.is_empty() {
        println!("Your pantry is empty.");
        return Ok(None);
    }

    let mut options: Vec<String> = pantry.list().iter().map(|i| i.name.clone()).collect();
    options.push("Cancel".to_string());

    let selection = prompt_select("Which ingredient?", &options, 0)?;
    Ok(pantry.list().get(selection).map(|i| i.id))
}

/// Choose a shopping-list row to toggle.
pub fn prompt_shopping_item(items: &[ShoppingItem]) -> Result<Option<String>> {
    let mut options: Vec<String> = items
        .iter()
        .map(|i| format!("[{}] {}", if i.checked { "x" } else { " " }, i.name))
        .collect();
    options.push("Done".to_string());

    let selection = prompt_select("Toggle which item?", &options, 0)?;
    Ok(items.get(selection).map(|i| i.name.clone()))
}
