use serde::Serialize;

/// One consolidated row of the shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingItem {
    /// Ingredient name, verbatim from the recipe.
    pub name: String,

    /// Titles of the planned recipes needing this ingredient, one entry per
    /// planned meal (repeats when a recipe is scheduled more than once).
    pub recipes: Vec<String>,

    pub checked: bool,
}
