use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::{PlannedMeal, ShoppingItem};
use crate::planner::collation;

/// Per-ingredient check marks, owned by the caller.
///
/// Keyed by the exact ingredient string. Entries are never dropped when an
/// ingredient leaves the list, so a mark comes back if the ingredient does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckState {
    marks: HashMap<String, bool>,
}

impl CheckState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_checked(&self, name: &str) -> bool {
        self.marks.get(name).copied().unwrap_or(false)
    }

    pub fn set(&mut self, name: &str, checked: bool) {
        self.marks.insert(name.to_string(), checked);
    }

    /// Flip the mark for `name` and return the new value.
    pub fn toggle(&mut self, name: &str) -> bool {
        let mark = self.marks.entry(name.to_string()).or_insert(false);
        *mark = !*mark;
        *mark
    }

    /// Number of names currently marked, including ones no longer listed.
    pub fn marked_count(&self) -> usize {
        self.marks.values().filter(|&&checked| checked).count()
    }
}

impl From<HashMap<String, bool>> for CheckState {
    fn from(marks: HashMap<String, bool>) -> Self {
        Self { marks }
    }
}

/// Consolidate the ingredients of every planned meal into one list.
///
/// Ingredient strings are exact keys: no trimming, no case folding. Rows
/// are ordered alphabetically with locale-aware comparison.
pub fn build(meals: &[PlannedMeal], checks: &CheckState) -> Vec<ShoppingItem> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut items: Vec<ShoppingItem> = Vec::new();

    for meal in meals {
        for ingredient in &meal.recipe.ingredients {
            match index.get(ingredient.as_str()) {
                Some(&pos) => items[pos].recipes.push(meal.recipe.title.clone()),
                None => {
                    index.insert(ingredient.as_str(), items.len());
                    items.push(ShoppingItem {
                        name: ingredient.clone(),
                        recipes: vec![meal.recipe.title.clone()],
                        checked: checks.is_checked(ingredient),
                    });
                }
            }
        }
    }

    items.sort_by(|a, b| collation::compare(&a.name, &b.name));

    debug!(
        meals = meals.len(),
        items = items.len(),
        "built shopping list"
    );

    items
}

/// Check-off progress over a built list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShoppingProgress {
    pub checked: usize,
    pub total: usize,
}

impl ShoppingProgress {
    /// Count only the rows actually present in `items`.
    pub fn of(items: &[ShoppingItem]) -> Self {
        Self {
            checked: items.iter().filter(|item| item.checked).count(),
            total: items.len(),
        }
    }

    /// 0.0 to 1.0; an empty list is 0.0.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.checked as f64 / self.total as f64
        }
    }

    pub fn percent(&self) -> u8 {
        (self.fraction() * 100.0).round() as u8
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.checked == self.total
    }
}

/// Write a built list as CSV: name, contributing recipes, checked.
pub fn write_csv(items: &[ShoppingItem], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["name", "recipes", "checked"])?;

    for item in items {
        wtr.write_record([
            item.name.as_str(),
            item.recipes.join("; ").as_str(),
            if item.checked { "true" } else { "false" },
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
