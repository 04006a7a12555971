use std::sync::Arc;

use meal_planner_rs::catalog::RecipeCatalog;
use meal_planner_rs::models::{MealType, Slot, Weekday};
use meal_planner_rs::planner::{build_shopping_list, suggest, CheckState, Suggestions};
use meal_planner_rs::state::{AddOutcome, MealPlanStore, PantryInventory};

fn catalog() -> RecipeCatalog {
    RecipeCatalog::builtin().expect("built-in catalog should parse")
}

#[test]
fn test_add_meal_appends_one_default_entry() {
    let catalog = catalog();
    let mut store = MealPlanStore::new();
    store.add_meal(Arc::clone(catalog.get("1").unwrap()));

    let before: Vec<_> = store.list().iter().map(|m| m.id).collect();
    let id = store.add_meal(Arc::clone(catalog.get("2").unwrap())).id;

    let new_entries: Vec<_> = store.list().iter().filter(|m| !before.contains(&m.id)).collect();
    assert_eq!(new_entries.len(), 1);
    assert_eq!(new_entries[0].id, id);
    assert_eq!(new_entries[0].day, Weekday::Monday);
    assert_eq!(new_entries[0].meal_type, MealType::Dinner);
}

#[test]
fn test_move_meal_keeps_meal_type() {
    let catalog = catalog();
    let mut store = MealPlanStore::new();
    let id = store.add_meal(Arc::clone(catalog.get("3").unwrap())).id;
    store.change_meal_type(id, MealType::Breakfast);

    store.move_meal(id, Weekday::Saturday);

    let meal = store.get(id).unwrap();
    assert_eq!(meal.day, Weekday::Saturday);
    assert_eq!(meal.meal_type, MealType::Breakfast);
    assert_eq!(meal.recipe.id, "3");
}

#[test]
fn test_remove_meal_is_idempotent() {
    let catalog = catalog();
    let mut store = MealPlanStore::new();
    let keep = store.add_meal(Arc::clone(catalog.get("1").unwrap())).id;
    let gone = store.add_meal(Arc::clone(catalog.get("2").unwrap())).id;

    store.remove_meal(gone);
    let after_once: Vec<_> = store.list().iter().map(|m| m.id).collect();

    store.remove_meal(gone);
    let after_twice: Vec<_> = store.list().iter().map(|m| m.id).collect();

    assert_eq!(after_once, vec![keep]);
    assert_eq!(after_once, after_twice);
}

#[test]
fn test_same_recipe_can_fill_several_slots() {
    let catalog = catalog();
    let soup = catalog.get("4").unwrap();
    let mut store = MealPlanStore::new();

    let a = store.add_meal(Arc::clone(soup)).id;
    let b = store.add_meal(Arc::clone(soup)).id;
    store.move_meal(b, Weekday::Wednesday);
    store.change_meal_type(b, MealType::Lunch);

    assert_ne!(a, b);
    assert_eq!(store.meals_in(Slot::new(Weekday::Monday, MealType::Dinner)).len(), 1);
    assert_eq!(store.meals_in(Slot::new(Weekday::Wednesday, MealType::Lunch)).len(), 1);
    assert!(Arc::ptr_eq(&store.get(a).unwrap().recipe, &store.get(b).unwrap().recipe));
}

#[test]
fn test_clear_empties_plan() {
    let catalog = catalog();
    let mut store = MealPlanStore::new();
    store.add_meal(Arc::clone(catalog.get("1").unwrap()));
    store.clear();
    assert!(store.is_empty());
}

#[test]
fn test_pantry_to_plan_to_shopping_list() {
    let catalog = catalog();

    let mut pantry = PantryInventory::new();
    assert!(pantry.add("Tomate", None).is_added());
    assert!(pantry.add("queijo feta", None).is_added());
    assert_eq!(pantry.add("TOMATE", None), AddOutcome::Duplicate);

    let top = match suggest(catalog.iter(), &pantry.names()) {
        Suggestions::Ranked(matches) => {
            assert!(matches.iter().all(|m| m.match_percentage > 0));
            matches[0].recipe.id.clone()
        }
        other => panic!("expected ranked suggestions, got {:?}", other),
    };

    let mut store = MealPlanStore::new();
    let recipe = catalog.get(&top).unwrap();
    store.add_meal(Arc::clone(recipe));

    let items = build_shopping_list(store.list(), &CheckState::new());
    assert_eq!(items.len(), recipe.ingredients.len());
    assert!(items.iter().all(|i| i.recipes == vec![recipe.title.clone()]));
}
