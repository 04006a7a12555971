mod filter;
mod loader;

pub use filter::RecipeFilter;
pub use loader::{builtin_recipes, load_recipes, parse_recipes};

use std::path::Path;
use std::sync::Arc;

use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::Recipe;
use crate::planner::constants::{FUZZY_MATCH_THRESHOLD, FUZZY_MAX_CANDIDATES};

/// Result of looking a recipe up by title.
#[derive(Debug, Clone, PartialEq)]
pub enum TitleLookup<'a> {
    Exact(&'a Arc<Recipe>),
    /// Close titles, most similar first.
    Candidates(Vec<&'a Arc<Recipe>>),
    NotFound,
}

/// The fixed, ordered recipe catalog.
///
/// Recipes are shared with planned meals and never mutated.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Arc<Recipe>>,
}

impl RecipeCatalog {
    /// Build a catalog, dropping invalid and duplicate-id records.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: loader::sanitize(recipes).into_iter().map(Arc::new).collect(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::from_recipes(parse_recipes(json)?))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_recipes(load_recipes(path)?))
    }

    /// The catalog bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Ok(Self::from_recipes(builtin_recipes()?))
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Recipe>> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Recipes in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter().map(|r| r.as_ref())
    }

    /// Recipes passing `filter`, in catalog order.
    pub fn filtered(&self, filter: RecipeFilter) -> Vec<&Recipe> {
        self.iter().filter(|r| filter.matches(r)).collect()
    }

    /// Find a recipe by title: exact (ignoring case) first, then fuzzy.
    pub fn find_by_title(&self, query: &str) -> TitleLookup<'_> {
        let query = query.trim().to_lowercase();

        if let Some(recipe) = self.recipes.iter().find(|r| r.title.to_lowercase() == query) {
            return TitleLookup::Exact(recipe);
        }

        let mut candidates: Vec<(&Arc<Recipe>, f64)> = self
            .recipes
            .iter()
            .map(|r| (r, jaro_winkler(&r.title.to_lowercase(), &query)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            TitleLookup::NotFound
        } else {
            TitleLookup::Candidates(
                candidates
                    .into_iter()
                    .take(FUZZY_MAX_CANDIDATES)
                    .map(|(r, _)| r)
                    .collect(),
            )
        }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
