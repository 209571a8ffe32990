use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrryxError {
    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(String),

    #[error("Unknown mood '{0}' (expected joy, calm, energized, warm, or upset)")]
    UnknownMood(String),

    #[error("Unknown theme '{0}' (expected midnight, daybreak, or system)")]
    UnknownTheme(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, OrryxError>;
