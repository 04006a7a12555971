use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Unknown {kind}: {value}")]
    UnknownLabel { kind: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
