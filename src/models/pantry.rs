use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Store-scoped identifier for a pantry item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PantryItemId(pub u64);

impl fmt::Display for PantryItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pantry-{}", self.0)
    }
}

/// Fixed ingredient categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IngredientCategory {
    #[serde(alias = "Proteínas")]
    Proteins,
    #[serde(alias = "Vegetais")]
    Vegetables,
    #[serde(alias = "Frutas")]
    Fruits,
    #[serde(alias = "Grãos")]
    Grains,
    #[serde(alias = "Laticínios")]
    Dairy,
    #[serde(alias = "Especiarias e Ervas")]
    SpicesHerbs,
    #[serde(alias = "Itens da Despensa")]
    PantryStaples,
    #[serde(alias = "Outros")]
    Other,
}

impl IngredientCategory {
    pub const ALL: [IngredientCategory; 8] = [
        IngredientCategory::Proteins,
        IngredientCategory::Vegetables,
        IngredientCategory::Fruits,
        IngredientCategory::Grains,
        IngredientCategory::Dairy,
        IngredientCategory::SpicesHerbs,
        IngredientCategory::PantryStaples,
        IngredientCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            IngredientCategory::Proteins => "Proteins",
            IngredientCategory::Vegetables => "Vegetables",
            IngredientCategory::Fruits => "Fruits",
            IngredientCategory::Grains => "Grains",
            IngredientCategory::Dairy => "Dairy",
            IngredientCategory::SpicesHerbs => "Spices & Herbs",
            IngredientCategory::PantryStaples => "Pantry Staples",
            IngredientCategory::Other => "Other",
        }
    }

    pub fn original_label(self) -> &'static str {
        match self {
            IngredientCategory::Proteins => "Proteínas",
            IngredientCategory::Vegetables => "Vegetais",
            IngredientCategory::Fruits => "Frutas",
            IngredientCategory::Grains => "Grãos",
            IngredientCategory::Dairy => "Laticínios",
            IngredientCategory::SpicesHerbs => "Especiarias e Ervas",
            IngredientCategory::PantryStaples => "Itens da Despensa",
            IngredientCategory::Other => "Outros",
        }
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for IngredientCategory {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_label("ingredient category", s, &Self::ALL, |c| {
            [c.label(), c.original_label()]
        })
    }
}

/// An ingredient the household has on hand.
///
/// `name` is stored lowercased; uniqueness is enforced by the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    pub id: PantryItemId,
    pub name: String,
    pub category: Option<IngredientCategory>,
    pub added_date: DateTime<Utc>,
}

impl PantryItem {
    /// Category used for grouping; uncategorized items count as `Other`.
    pub fn effective_category(&self) -> IngredientCategory {
        self.category.unwrap_or(IngredientCategory::Other)
    }
}
