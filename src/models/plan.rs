use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::models::Recipe;

/// Store-scoped identifier for a planned meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MealId(pub u64);

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "meal-{}", self.0)
    }
}

/// The seven fixed weekday columns of the plan, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(alias = "Segunda")]
    Monday,
    #[serde(alias = "Terça")]
    Tuesday,
    #[serde(alias = "Quarta")]
    Wednesday,
    #[serde(alias = "Quinta")]
    Thursday,
    #[serde(alias = "Sexta")]
    Friday,
    #[serde(alias = "Sábado")]
    Saturday,
    #[serde(alias = "Domingo")]
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    pub fn original_label(self) -> &'static str {
        match self {
            Weekday::Monday => "Segunda",
            Weekday::Tuesday => "Terça",
            Weekday::Wednesday => "Quarta",
            Weekday::Thursday => "Quinta",
            Weekday::Friday => "Sexta",
            Weekday::Saturday => "Sábado",
            Weekday::Sunday => "Domingo",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Weekday {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_label("weekday", s, &Self::ALL, |d| [d.label(), d.original_label()])
    }
}

/// Meal slot within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    #[serde(alias = "café da manhã")]
    Breakfast,
    #[serde(alias = "almoço")]
    Lunch,
    #[serde(alias = "jantar")]
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn label(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }

    pub fn original_label(self) -> &'static str {
        match self {
            MealType::Breakfast => "café da manhã",
            MealType::Lunch => "almoço",
            MealType::Dinner => "jantar",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for MealType {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_label("meal type", s, &Self::ALL, |m| [m.label(), m.original_label()])
    }
}

/// A (day, meal type) coordinate in the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    pub day: Weekday,
    pub meal_type: MealType,
}

impl Slot {
    pub fn new(day: Weekday, meal_type: MealType) -> Self {
        Self { day, meal_type }
    }
}

/// A recipe bound to a slot of the week.
///
/// The recipe is shared with the catalog and never copied or mutated.
/// Only `day` and `meal_type` change after creation, and only through the
/// owning store.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedMeal {
    pub id: MealId,
    pub recipe: Arc<Recipe>,
    pub day: Weekday,
    pub meal_type: MealType,
}

impl PlannedMeal {
    pub fn slot(&self) -> Slot {
        Slot::new(self.day, self.meal_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_parses_both_languages() {
        assert_eq!("segunda".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("Sábado".parse::<Weekday>().unwrap(), Weekday::Saturday);
        assert_eq!(" friday ".parse::<Weekday>().unwrap(), Weekday::Friday);
    }

    #[test]
    fn test_weekday_rejects_unknown_label() {
        let err = "Funday".parse::<Weekday>().unwrap_err();
        assert!(matches!(err, PlannerError::UnknownLabel { kind: "weekday", .. }));
    }

    #[test]
    fn test_meal_type_parses_original_labels() {
        assert_eq!("café da manhã".parse::<MealType>().unwrap(), MealType::Breakfast);
        assert_eq!("ALMOÇO".parse::<MealType>().unwrap(), MealType::Lunch);
        assert_eq!("dinner".parse::<MealType>().unwrap(), MealType::Dinner);
    }

    #[test]
    fn test_meal_type_serde_accepts_alias() {
        let meal_type: MealType = serde_json::from_str(r#""jantar""#).unwrap();
        assert_eq!(meal_type, MealType::Dinner);
        assert_eq!(serde_json::to_string(&MealType::Lunch).unwrap(), r#""lunch""#);
    }
}
