mod matching;
mod pantry;
mod plan;
mod recipe;
mod shopping;

pub use matching::RecipeMatch;
pub use pantry::{IngredientCategory, PantryItem, PantryItemId};
pub use plan::{MealId, MealType, PlannedMeal, Slot, Weekday};
pub use recipe::{Difficulty, Recipe};
pub use shopping::ShoppingItem;

use crate::error::{PlannerError, Result};

/// Resolve a user-facing label against a fixed enumeration.
///
/// Both the English label and the Portuguese original are accepted,
/// compared case-insensitively after trimming.
pub(crate) fn parse_label<T: Copy>(
    kind: &'static str,
    value: &str,
    all: &[T],
    labels: impl Fn(T) -> [&'static str; 2],
) -> Result<T> {
    let wanted = value.trim().to_lowercase();
    all.iter()
        .copied()
        .find(|&v| labels(v).iter().any(|l| l.to_lowercase() == wanted))
        .ok_or_else(|| PlannerError::UnknownLabel {
            kind,
            value: value.to_string(),
        })
}
