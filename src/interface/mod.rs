pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_category, prompt_filter, prompt_meal, prompt_meal_type, prompt_pantry_item,
    prompt_recipe, prompt_select, prompt_shopping_item, prompt_text, prompt_weekday,
    prompt_yes_no,
};
pub use render::{
    display_pantry, display_pantry_items, display_recipes, display_shopping_list,
    display_suggestions, display_week,
};
