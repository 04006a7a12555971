pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use catalog::{RecipeCatalog, RecipeFilter};
pub use error::{PlannerError, Result};
pub use models::{
    Difficulty, IngredientCategory, MealId, MealType, PantryItem, PantryItemId, PlannedMeal,
    Recipe, ShoppingItem, Slot, Weekday,
};
pub use state::{AddOutcome, MealPlanStore, PantryInventory};
