pub mod collation;
pub mod constants;
pub mod matching;
pub mod shopping;

pub use constants::*;
pub use matching::{is_available, match_percentage, match_recipe, rank, suggest, Suggestions};
pub use shopping::{build as build_shopping_list, write_csv, CheckState, ShoppingProgress};
