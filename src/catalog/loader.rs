use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::Result;
use crate::models::Recipe;

/// Catalog shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../../data/recipes.json");

/// Drop records that repeat an earlier id or carry negative figures.
///
/// First occurrence wins and catalog order is kept, since ranking ties
/// fall back to it.
pub fn sanitize(recipes: Vec<Recipe>) -> Vec<Recipe> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut kept = Vec::with_capacity(recipes.len());

    for recipe in recipes {
        if !recipe.is_valid() {
            warn!(id = %recipe.id, title = %recipe.title, "skipping invalid recipe");
            continue;
        }
        if !seen.insert(recipe.id.clone()) {
            warn!(id = %recipe.id, title = %recipe.title, "skipping duplicate recipe id");
            continue;
        }
        kept.push(recipe);
    }

    kept
}

/// Parse recipes from a JSON array.
pub fn parse_recipes(json: &str) -> Result<Vec<Recipe>> {
    let recipes: Vec<Recipe> = serde_json::from_str(json)?;
    Ok(sanitize(recipes))
}

/// Load recipes from a JSON file.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let recipes = parse_recipes(&content)?;
    info!(path = %path.display(), count = recipes.len(), "loaded recipe catalog");
    Ok(recipes)
}

/// Recipes from the bundled catalog.
pub fn builtin_recipes() -> Result<Vec<Recipe>> {
    parse_recipes(BUILTIN_CATALOG)
}
