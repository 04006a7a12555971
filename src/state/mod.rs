mod meal_plan;
mod pantry;

pub use meal_plan::MealPlanStore;
pub use pantry::{AddOutcome, PantryInventory};
