use tracing::debug;

use crate::models::{Recipe, RecipeMatch};

/// Outcome of asking for "what can I cook now".
///
/// An empty pantry and a pantry that matches nothing both leave the ranked
/// list empty, so they are kept apart here.
#[derive(Debug, Clone, PartialEq)]
pub enum Suggestions<'a> {
    /// The pantry holds no ingredients yet.
    EmptyPantry,
    /// The pantry has ingredients but no recipe uses any of them.
    NoMatches,
    /// Recipes with a positive match, best first.
    Ranked(Vec<RecipeMatch<'a>>),
}

/// Lowercase and drop blank names so they cannot match every ingredient.
fn normalize_pantry<S: AsRef<str>>(pantry: &[S]) -> Vec<String> {
    pantry
        .iter()
        .map(|name| name.as_ref().trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Loose availability test: either name contains the other, ignoring case.
///
/// `pantry` must already be lowercased.
pub fn is_available(ingredient: &str, pantry: &[String]) -> bool {
    let ingredient = ingredient.to_lowercase();
    pantry
        .iter()
        .any(|have| ingredient.contains(have.as_str()) || have.contains(ingredient.as_str()))
}

/// Share of matched ingredients as a 0..=100 integer, rounding halves up.
///
/// A recipe with no ingredients scores 0.
pub fn match_percentage(available: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let ratio = 100.0 * available as f64 / total as f64;
    (ratio + 0.5).floor().clamp(0.0, 100.0) as u8
}

/// Partition one recipe's ingredients against a lowercased pantry.
fn match_normalized<'a>(recipe: &'a Recipe, pantry: &[String]) -> RecipeMatch<'a> {
    let (available, missing): (Vec<&str>, Vec<&str>) = recipe
        .ingredients
        .iter()
        .map(String::as_str)
        .partition(|ingredient| is_available(ingredient, pantry));

    let match_percentage = match_percentage(available.len(), recipe.ingredients.len());

    RecipeMatch {
        recipe,
        available_ingredients: available,
        missing_ingredients: missing,
        match_percentage,
    }
}

/// Match a single recipe against the pantry.
pub fn match_recipe<'a, S: AsRef<str>>(recipe: &'a Recipe, pantry: &[S]) -> RecipeMatch<'a> {
    match_normalized(recipe, &normalize_pantry(pantry))
}

/// Score every recipe and sort best first.
///
/// Ties keep input order. Recipes scoring 0 are included.
pub fn rank<'a, I, S>(recipes: I, pantry: &[S]) -> Vec<RecipeMatch<'a>>
where
    I: IntoIterator<Item = &'a Recipe>,
    S: AsRef<str>,
{
    let pantry = normalize_pantry(pantry);

    let mut matches: Vec<RecipeMatch<'a>> = recipes
        .into_iter()
        .map(|recipe| match_normalized(recipe, &pantry))
        .collect();

    // sort_by is stable
    matches.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));

    debug!(
        recipes = matches.len(),
        pantry = pantry.len(),
        "ranked recipes against pantry"
    );

    matches
}

/// Rank recipes for display, distinguishing empty input from no matches.
pub fn suggest<'a, I, S>(recipes: I, pantry: &[S]) -> Suggestions<'a>
where
    I: IntoIterator<Item = &'a Recipe>,
    S: AsRef<str>,
{
    if pantry.is_empty() {
        return Suggestions::EmptyPantry;
    }

    let relevant: Vec<RecipeMatch<'a>> = rank(recipes, pantry)
        .into_iter()
        .filter(|m| m.match_percentage > 0)
        .collect();

    if relevant.is_empty() {
        Suggestions::NoMatches
    } else {
        Suggestions::Ranked(relevant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn recipe(id: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: format!("Recipe {}", id),
            description: String::new(),
            cook_time: 20,
            difficulty: Difficulty::Easy,
            tags: vec![],
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            servings: 2,
            calories: 300.0,
            price: 10.0,
        }
    }

    #[test]
    fn test_match_percentage_rounds_half_up() {
        assert_eq!(match_percentage(1, 8), 13);
        assert_eq!(match_percentage(2, 6), 33);
        assert_eq!(match_percentage(1, 3), 33);
        assert_eq!(match_percentage(2, 3), 67);
        assert_eq!(match_percentage(3, 3), 100);
    }

    #[test]
    fn test_match_percentage_zero_ingredients() {
        assert_eq!(match_percentage(0, 0), 0);
    }

    #[test]
    fn test_substring_matches_both_directions() {
        let pantry = vec!["tomate".to_string(), "queijo feta em cubos".to_string()];
        assert!(is_available("Tomates", &pantry));
        assert!(is_available("queijo feta", &pantry));
        assert!(!is_available("azeite", &pantry));
    }

    #[test]
    fn test_blank_pantry_names_are_ignored() {
        let r = recipe("1", &["alho", "sal"]);
        let m = match_recipe(&r, &["", "   "]);
        assert_eq!(m.match_percentage, 0);
        assert_eq!(m.missing_ingredients, vec!["alho", "sal"]);
    }

    #[test]
    fn test_pantry_names_are_lowercased() {
        let r = recipe("1", &["alho", "sal"]);
        let m = match_recipe(&r, &["ALHO"]);
        assert_eq!(m.available_ingredients, vec!["alho"]);
        assert_eq!(m.match_percentage, 50);
    }

    #[test]
    fn test_suggest_empty_pantry() {
        let r = recipe("1", &["alho"]);
        let empty: [&str; 0] = [];
        assert_eq!(suggest([&r], &empty), Suggestions::EmptyPantry);
    }

    #[test]
    fn test_suggest_no_matches() {
        let r = recipe("1", &["alho"]);
        assert_eq!(suggest([&r], &["chocolate"]), Suggestions::NoMatches);
    }

    #[test]
    fn test_suggest_filters_zero_scores() {
        let a = recipe("a", &["alho"]);
        let b = recipe("b", &["arroz", "feijão"]);
        match suggest([&a, &b], &["arroz"]) {
            Suggestions::Ranked(matches) => {
                assert_eq!(matches.len(), 1);
                assert_eq!(matches[0].recipe.id, "b");
            }
            other => panic!("expected ranked suggestions, got {:?}", other),
        }
    }
}
