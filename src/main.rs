use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use meal_planner_rs::catalog::{RecipeCatalog, RecipeFilter};
use meal_planner_rs::cli::{Cli, Command};
use meal_planner_rs::error::{PlannerError, Result};
use meal_planner_rs::interface::{
    display_pantry, display_pantry_items, display_recipes, display_shopping_list,
    display_suggestions, display_week, prompt_category, prompt_filter, prompt_meal,
    prompt_meal_type, prompt_pantry_item, prompt_recipe, prompt_select, prompt_shopping_item,
    prompt_text, prompt_weekday,
};
use meal_planner_rs::planner::{
    build_shopping_list, rank, suggest, write_csv, CheckState, DEFAULT_DAY, DEFAULT_MEAL_TYPE,
};
use meal_planner_rs::state::{AddOutcome, MealPlanStore, PantryInventory};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command.unwrap_or_default() {
        Command::Session => cmd_session(&catalog),
        Command::Recipes { filter } => cmd_recipes(&catalog, filter),
        Command::Suggest { have, json } => cmd_suggest(&catalog, &have, json),
        Command::Shopping { recipes, csv, json } => cmd_shopping(&catalog, &recipes, csv, json),
    }
}

fn load_catalog(path: Option<&Path>) -> Result<RecipeCatalog> {
    match path {
        Some(path) => RecipeCatalog::load(path),
        None => RecipeCatalog::builtin(),
    }
}

/// List catalog recipes.
fn cmd_recipes(catalog: &RecipeCatalog, filter: RecipeFilter) -> Result<()> {
    let recipes = catalog.filtered(filter);
    display_recipes(recipes, filter.label());
    Ok(())
}

/// Rank the catalog against the given ingredients.
fn cmd_suggest(catalog: &RecipeCatalog, have: &[String], json: bool) -> Result<()> {
    // Go through the pantry so names get the same trimming and dedup.
    let mut pantry = PantryInventory::new();
    for name in have {
        pantry.add(name, None);
    }
    let names = pantry.names();

    if json {
        let ranked = rank(catalog.iter(), &names);
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    display_suggestions(&suggest(catalog.iter(), &names));
    Ok(())
}

/// Plan the given recipes and print or export the shopping list.
fn cmd_shopping(
    catalog: &RecipeCatalog,
    recipe_ids: &[String],
    csv: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let mut store = MealPlanStore::new();
    for id in recipe_ids {
        let recipe = catalog
            .get(id)
            .ok_or_else(|| PlannerError::RecipeNotFound(id.clone()))?;
        store.add_meal(Arc::clone(recipe));
    }

    let items = build_shopping_list(store.list(), &CheckState::new());

    if let Some(path) = csv {
        write_csv(&items, &path)?;
        println!("Wrote {} items to {}", items.len(), path.display());
    } else if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        display_shopping_list(&items);
    }

    Ok(())
}

/// Everything the interactive session owns. Nothing outlives the process.
struct Session<'a> {
    catalog: &'a RecipeCatalog,
    pantry: PantryInventory,
    plan: MealPlanStore,
    checks: CheckState,
}

const MENU: [&str; 13] = [
    "Browse recipes",
    "Add a recipe to the week",
    "Show the week",
    "Move a meal to another day",
    "Change a meal's type",
    "Remove a meal",
    "Show pantry",
    "Add pantry ingredient",
    "Remove pantry ingredient",
    "Search pantry",
    "What can I cook?",
    "Shopping list",
    "Quit",
];

/// Interactive planning session.
fn cmd_session(catalog: &RecipeCatalog) -> Result<()> {
    println!("Loaded {} recipes", catalog.len());

    let mut session = Session {
        catalog,
        pantry: PantryInventory::new(),
        plan: MealPlanStore::new(),
        checks: CheckState::new(),
    };

    let menu: Vec<String> = MENU.iter().map(|s| s.to_string()).collect();

    loop {
        println!();
        let choice = prompt_select("What would you like to do?", &menu, 0)?;
        match choice {
            0 => session.browse()?,
            1 => session.add_to_week()?,
            2 => display_week(&session.plan),
            3 => session.move_meal()?,
            4 => session.change_meal_type()?,
            5 => session.remove_meal()?,
            6 => display_pantry(&session.pantry),
            7 => session.add_pantry_item()?,
            8 => session.remove_pantry_item()?,
            9 => session.search_pantry()?,
            10 => display_suggestions(&suggest(session.catalog.iter(), &session.pantry.names())),
            11 => session.shopping()?,
            _ => break,
        }
    }

    Ok(())
}

impl Session<'_> {
    fn browse(&self) -> Result<()> {
        let filter = prompt_filter()?;
        cmd_recipes(self.catalog, filter)
    }

    fn add_to_week(&mut self) -> Result<()> {
        if let Some(recipe) = prompt_recipe(self.catalog)? {
            let meal = self.plan.add_meal(recipe);
            println!(
                "{} added to your plan ({} {})",
                meal.recipe.title, meal.day, meal.meal_type
            );
        }
        Ok(())
    }

    fn move_meal(&mut self) -> Result<()> {
        if let Some(id) = prompt_meal(&self.plan)? {
            let current = self.plan.get(id).map(|m| m.day).unwrap_or(DEFAULT_DAY);
            let day = prompt_weekday(current)?;
            self.plan.move_meal(id, day);
        }
        Ok(())
    }

    fn change_meal_type(&mut self) -> Result<()> {
        if let Some(id) = prompt_meal(&self.plan)? {
            let current = self.plan.get(id).map(|m| m.meal_type).unwrap_or(DEFAULT_MEAL_TYPE);
            let meal_type = prompt_meal_type(current)?;
            self.plan.change_meal_type(id, meal_type);
        }
        Ok(())
    }

    fn remove_meal(&mut self) -> Result<()> {
        if let Some(id) = prompt_meal(&self.plan)? {
            self.plan.remove_meal(id);
            println!("Meal removed from the plan.");
        }
        Ok(())
    }

    fn add_pantry_item(&mut self) -> Result<()> {
        let name = prompt_text("Ingredient name", true)?;
        let category = if name.is_empty() { None } else { prompt_category()? };

        match self.pantry.add(&name, category) {
            AddOutcome::Added(item) => println!("{} added to your pantry!", item.name),
            AddOutcome::Duplicate => println!("This ingredient is already in your pantry."),
            AddOutcome::EmptyName => println!("Please enter an ingredient name."),
        }
        Ok(())
    }

    fn remove_pantry_item(&mut self) -> Result<()> {
        if let Some(id) = prompt_pantry_item(&self.pantry)? {
            if let Some(item) = self.pantry.remove(id) {
                println!("{} removed from your pantry.", item.name);
            }
        }
        Ok(())
    }

    fn search_pantry(&self) -> Result<()> {
        let term = prompt_text("Search by name or category", true)?;
        let found = self.pantry.search(&term);
        println!("Showing {} of {}", found.len(), self.pantry.len());
        display_pantry_items(&found);
        Ok(())
    }

    fn shopping(&mut self) -> Result<()> {
        loop {
            let items = build_shopping_list(self.plan.list(), &self.checks);
            display_shopping_list(&items);
            if items.is_empty() {
                return Ok(());
            }

            let actions = vec![
                "Check / uncheck an item".to_string(),
                "Export to CSV".to_string(),
                "Back".to_string(),
            ];
            match prompt_select("Shopping list", &actions, 0)? {
                0 => {
                    if let Some(name) = prompt_shopping_item(&items)? {
                        self.checks.toggle(&name);
                    }
                }
                1 => {
                    let path = prompt_text("CSV file path", false)?;
                    write_csv(&items, Path::new(&path))?;
                    println!("Wrote {} items to {}", items.len(), path);
                }
                _ => return Ok(()),
            }
        }
    }
}
