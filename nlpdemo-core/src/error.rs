use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No model info for model with id {0}.")]
    ModelInfoNotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
