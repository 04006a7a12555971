use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::RecipeFilter;

/// MealPlanner — pick recipes from your pantry, plan the week, build the shopping list.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a recipe catalog JSON file (defaults to the built-in catalog).
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Interactive planning session.
    #[default]
    Session,

    /// List catalog recipes.
    Recipes {
        /// Only show recipes matching this filter.
        #[arg(long, value_enum, default_value_t = RecipeFilter::All)]
        filter: RecipeFilter,
    },

    /// Rank recipes by the ingredients you have.
    Suggest {
        /// An ingredient you have on hand (repeatable).
        #[arg(long = "have", value_name = "INGREDIENT")]
        have: Vec<String>,

        /// Print the ranking as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Build a shopping list for the given recipes.
    Shopping {
        /// Recipe id to plan (repeatable; repeat an id to plan it twice).
        #[arg(long = "recipe", value_name = "ID", required = true)]
        recipes: Vec<String>,

        /// Write the list to a CSV file instead of printing it.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print the list as JSON.
        #[arg(long, conflicts_with = "csv")]
        json: bool,
    },
}
