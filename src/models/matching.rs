use serde::Serialize;

use crate::models::Recipe;

/// How well a recipe can be covered by the pantry.
///
/// Derived on demand and never stored. `available_ingredients` and
/// `missing_ingredients` partition `recipe.ingredients`, each keeping
/// recipe order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeMatch<'a> {
    pub recipe: &'a Recipe,
    pub available_ingredients: Vec<&'a str>,
    pub missing_ingredients: Vec<&'a str>,
    /// 0 to 100.
    pub match_percentage: u8,
}

impl RecipeMatch<'_> {
    /// True when every ingredient is covered.
    pub fn is_complete(&self) -> bool {
        !self.recipe.ingredients.is_empty() && self.missing_ingredients.is_empty()
    }
}
