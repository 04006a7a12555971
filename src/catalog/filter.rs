use clap::ValueEnum;

use crate::models::{Difficulty, Recipe};
use crate::planner::constants::{
    QUICK_COOK_TIME_MAX, TAG_DAIRY_FREE, TAG_DESSERT, TAG_GLUTEN_FREE, TAG_VEGETARIAN,
};

/// Quick filters for browsing the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RecipeFilter {
    #[default]
    All,
    /// Ready in 30 minutes or less.
    Quick,
    Vegetarian,
    GlutenFree,
    DairyFree,
    Easy,
    Desserts,
}

impl RecipeFilter {
    pub const ALL: [RecipeFilter; 7] = [
        RecipeFilter::All,
        RecipeFilter::Quick,
        RecipeFilter::Vegetarian,
        RecipeFilter::GlutenFree,
        RecipeFilter::DairyFree,
        RecipeFilter::Easy,
        RecipeFilter::Desserts,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RecipeFilter::All => "All recipes",
            RecipeFilter::Quick => "Quick (<= 30 min)",
            RecipeFilter::Vegetarian => "Vegetarian",
            RecipeFilter::GlutenFree => "Gluten-free",
            RecipeFilter::DairyFree => "Dairy-free",
            RecipeFilter::Easy => "Easy",
            RecipeFilter::Desserts => "Desserts",
        }
    }

    pub fn matches(self, recipe: &Recipe) -> bool {
        match self {
            RecipeFilter::All => true,
            RecipeFilter::Quick => recipe.cook_time <= QUICK_COOK_TIME_MAX,
            RecipeFilter::Easy => recipe.difficulty == Difficulty::Easy,
            RecipeFilter::Vegetarian => recipe.has_tag(TAG_VEGETARIAN),
            RecipeFilter::GlutenFree => recipe.has_tag(TAG_GLUTEN_FREE),
            RecipeFilter::DairyFree => recipe.has_tag(TAG_DAIRY_FREE),
            RecipeFilter::Desserts => recipe.has_tag(TAG_DESSERT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(cook_time: u32, difficulty: Difficulty, tags: &[&str]) -> Recipe {
        Recipe {
            id: "x".to_string(),
            title: "X".to_string(),
            description: String::new(),
            cook_time,
            difficulty,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ingredients: vec![],
            servings: 1,
            calories: 0.0,
            price: 0.0,
        }
    }

    #[test]
    fn test_quick_includes_boundary() {
        assert!(RecipeFilter::Quick.matches(&recipe(30, Difficulty::Hard, &[])));
        assert!(!RecipeFilter::Quick.matches(&recipe(31, Difficulty::Easy, &[])));
    }

    #[test]
    fn test_tag_filters_use_catalog_labels() {
        let r = recipe(60, Difficulty::Medium, &["sem glúten", "sobremesa"]);
        assert!(RecipeFilter::GlutenFree.matches(&r));
        assert!(RecipeFilter::Desserts.matches(&r));
        assert!(!RecipeFilter::Vegetarian.matches(&r));
        assert!(!RecipeFilter::Easy.matches(&r));
        assert!(RecipeFilter::All.matches(&r));
    }
}
