use thiserror::Error;

use crate::models::Attribute;

#[derive(Debug, Error)]
pub enum DishError {
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("{attribute} must be between {min} and {max}, got {value}")]
    OutOfRange {
        attribute: Attribute,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Dish not found: {0}")]
    DishNotFound(String),

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

pub type Result<T> = std::result::Result<T, DishError>;
