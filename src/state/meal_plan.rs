use std::sync::Arc;

use tracing::debug;

use crate::models::{MealId, MealType, PlannedMeal, Recipe, Slot, Weekday};
use crate::planner::constants::{DEFAULT_DAY, DEFAULT_MEAL_TYPE};

/// The weekly schedule of planned meals.
///
/// Every operation is total: unknown ids are silently ignored. Meals keep
/// insertion order.
#[derive(Debug, Default)]
pub struct MealPlanStore {
    meals: Vec<PlannedMeal>,
    next_id: u64,
}

impl MealPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn find_mut(&mut self, id: MealId) -> Option<&mut PlannedMeal> {
        self.meals.iter_mut().find(|meal| meal.id == id)
    }

    /// Schedule a recipe in the default slot (Monday dinner).
    pub fn add_meal(&mut self, recipe: Arc<Recipe>) -> &PlannedMeal {
        self.next_id += 1;
        let meal = PlannedMeal {
            id: MealId(self.next_id),
            recipe,
            day: DEFAULT_DAY,
            meal_type: DEFAULT_MEAL_TYPE,
        };

        debug!(id = %meal.id, recipe = %meal.recipe.title, "planned meal");
        let pos = self.meals.len();
        self.meals.push(meal);
        &self.meals[pos]
    }

    /// Remove a meal. Removing an unknown id does nothing.
    pub fn remove_meal(&mut self, id: MealId) {
        let before = self.meals.len();
        self.meals.retain(|meal| meal.id != id);
        if self.meals.len() != before {
            debug!(id = %id, "removed meal");
        }
    }

    /// Move a meal to another day, keeping its meal type.
    pub fn move_meal(&mut self, id: MealId, day: Weekday) {
        if let Some(meal) = self.find_mut(id) {
            meal.day = day;
            debug!(id = %id, day = %day, "moved meal");
        }
    }

    /// Change a meal's type, keeping its day.
    pub fn change_meal_type(&mut self, id: MealId, meal_type: MealType) {
        if let Some(meal) = self.find_mut(id) {
            meal.meal_type = meal_type;
            debug!(id = %id, meal_type = %meal_type, "changed meal type");
        }
    }

    pub fn get(&self, id: MealId) -> Option<&PlannedMeal> {
        self.meals.iter().find(|meal| meal.id == id)
    }

    pub fn list(&self) -> &[PlannedMeal] {
        &self.meals
    }

    pub fn meals_on(&self, day: Weekday) -> Vec<&PlannedMeal> {
        self.meals.iter().filter(|meal| meal.day == day).collect()
    }

    pub fn meals_in(&self, slot: Slot) -> Vec<&PlannedMeal> {
        self.meals.iter().filter(|meal| meal.slot() == slot).collect()
    }

    pub fn clear(&mut self) {
        self.meals.clear();
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn sample_recipe() -> Arc<Recipe> {
        Arc::new(Recipe {
            id: "1".to_string(),
            title: "Sopa de Legumes".to_string(),
            description: String::new(),
            cook_time: 45,
            difficulty: Difficulty::Easy,
            tags: vec![],
            ingredients: vec!["cenouras".to_string(), "aipo".to_string()],
            servings: 6,
            calories: 180.0,
            price: 8.5,
        })
    }

    #[test]
    fn test_add_meal_defaults_to_monday_dinner() {
        let mut store = MealPlanStore::new();
        let meal = store.add_meal(sample_recipe());
        assert_eq!(meal.day, Weekday::Monday);
        assert_eq!(meal.meal_type, MealType::Dinner);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_meal_shares_recipe() {
        let recipe = sample_recipe();
        let mut store = MealPlanStore::new();
        store.add_meal(Arc::clone(&recipe));
        assert!(Arc::ptr_eq(&store.list()[0].recipe, &recipe));
    }

    #[test]
    fn test_ids_are_distinct() {
        let mut store = MealPlanStore::new();
        let a = store.add_meal(sample_recipe()).id;
        let b = store.add_meal(sample_recipe()).id;
        assert_ne!(a, b);
    }

    #[test]
    fn test_change_meal_type_keeps_day() {
        let mut store = MealPlanStore::new();
        let id = store.add_meal(sample_recipe()).id;
        store.move_meal(id, Weekday::Thursday);
        store.change_meal_type(id, MealType::Lunch);

        let meal = store.get(id).unwrap();
        assert_eq!(meal.day, Weekday::Thursday);
        assert_eq!(meal.meal_type, MealType::Lunch);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut store = MealPlanStore::new();
        store.add_meal(sample_recipe());
        store.move_meal(MealId(42), Weekday::Friday);
        store.change_meal_type(MealId(42), MealType::Breakfast);
        store.remove_meal(MealId(42));

        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].day, Weekday::Monday);
        assert_eq!(store.list()[0].meal_type, MealType::Dinner);
    }

    #[test]
    fn test_meals_in_slot() {
        let mut store = MealPlanStore::new();
        let a = store.add_meal(sample_recipe()).id;
        let b = store.add_meal(sample_recipe()).id;
        store.change_meal_type(b, MealType::Lunch);

        let dinners = store.meals_in(Slot::new(Weekday::Monday, MealType::Dinner));
        assert_eq!(dinners.len(), 1);
        assert_eq!(dinners[0].id, a);
        assert_eq!(store.meals_on(Weekday::Monday).len(), 2);
        assert!(store.meals_on(Weekday::Sunday).is_empty());
    }
}
