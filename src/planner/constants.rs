use crate::models::{MealType, Weekday};

/// Day assigned to a freshly planned meal.
pub const DEFAULT_DAY: Weekday = Weekday::Monday;

/// Meal type assigned to a freshly planned meal.
pub const DEFAULT_MEAL_TYPE: MealType = MealType::Dinner;

/// Maximum cooking time (minutes) for a recipe to count as quick.
pub const QUICK_COOK_TIME_MAX: u32 = 30;

/// Minimum Jaro-Winkler similarity for a fuzzy title match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum number of fuzzy candidates offered to the user.
pub const FUZZY_MAX_CANDIDATES: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Catalog tag labels
// ─────────────────────────────────────────────────────────────────────────────

pub const TAG_VEGETARIAN: &str = "vegetariano";
pub const TAG_GLUTEN_FREE: &str = "sem glúten";
pub const TAG_DAIRY_FREE: &str = "sem lactose";
pub const TAG_DESSERT: &str = "sobremesa";
