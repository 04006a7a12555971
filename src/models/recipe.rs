use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// How hard a recipe is to prepare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(alias = "Fácil")]
    Easy,
    #[serde(alias = "Médio")]
    Medium,
    #[serde(alias = "Difícil")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Label used by the bundled catalog data.
    pub fn original_label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Médio",
            Difficulty::Hard => "Difícil",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_label("difficulty", s, &Self::ALL, |d| {
            [d.label(), d.original_label()]
        })
    }
}

/// A catalog recipe. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Cooking time in minutes.
    pub cook_time: u32,

    pub difficulty: Difficulty,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Ingredient names in recipe order. Opaque strings, no quantities.
    #[serde(default)]
    pub ingredients: Vec<String>,

    pub servings: u32,

    /// Calories per serving.
    pub calories: f64,

    /// Estimated price per serving.
    pub price: f64,
}

impl Recipe {
    /// Exact tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Basic validation: non-negative numeric figures.
    pub fn is_valid(&self) -> bool {
        self.calories >= 0.0 && self.price >= 0.0 && !self.id.trim().is_empty()
    }
}
