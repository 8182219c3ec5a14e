use thiserror::Error;

pub mod config;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid date for field '{field}': {value}")]
    InvalidDate { field: &'static str, value: String },

    #[error("Duplicate product id: {0}")]
    DuplicateProduct(i64),

    #[error("Product {0} not found")]
    ProductNotFound(i64),

    #[error("{0}")]
    Other(String),
}
