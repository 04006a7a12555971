use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{debug, warn};

use crate::models::{IngredientCategory, PantryItem, PantryItemId};

/// Result of trying to add an ingredient to the pantry.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(PantryItem),
    /// An item with the same name (ignoring case) is already stored.
    Duplicate,
    /// The name was empty after trimming.
    EmptyName,
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added(_))
    }
}

/// The ingredients the household has on hand.
///
/// Names are unique ignoring case. Items keep insertion order.
#[derive(Debug, Default)]
pub struct PantryInventory {
    items: Vec<PantryItem>,
    next_id: u64,
}

impl PantryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ingredient, stored trimmed and lowercased.
    pub fn add(&mut self, name: &str, category: Option<IngredientCategory>) -> AddOutcome {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return AddOutcome::EmptyName;
        }

        if self.contains(&name) {
            warn!(name = %name, "pantry already holds this ingredient");
            return AddOutcome::Duplicate;
        }

        self.next_id += 1;
        let item = PantryItem {
            id: PantryItemId(self.next_id),
            name,
            category,
            added_date: Utc::now(),
        };

        debug!(id = %item.id, name = %item.name, "added pantry item");
        self.items.push(item.clone());
        AddOutcome::Added(item)
    }

    /// Remove an item by id. Unknown ids are ignored.
    pub fn remove(&mut self, id: PantryItemId) -> Option<PantryItem> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(pos);
        debug!(id = %id, name = %removed.name, "removed pantry item");
        Some(removed)
    }

    pub fn get(&self, id: PantryItemId) -> Option<&PantryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Case-insensitive name lookup.
    pub fn contains(&self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        self.items.iter().any(|item| item.name == name)
    }

    pub fn list(&self) -> &[PantryItem] {
        &self.items
    }

    /// Ingredient names, for matching against recipes.
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }

    /// Items whose name or category label contains `term`, ignoring case.
    ///
    /// An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<&PantryItem> {
        let term = term.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                item.name.contains(&term)
                    || item.category.is_some_and(|c| {
                        c.label().to_lowercase().contains(&term)
                            || c.original_label().to_lowercase().contains(&term)
                    })
            })
            .collect()
    }

    /// Items grouped by category, in category order.
    pub fn by_category(&self) -> BTreeMap<IngredientCategory, Vec<&PantryItem>> {
        let mut groups: BTreeMap<IngredientCategory, Vec<&PantryItem>> = BTreeMap::new();
        for item in &self.items {
            groups.entry(item.effective_category()).or_default().push(item);
        }
        groups
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
