use thiserror::Error;

/// Message for payloads that match no known prediction shape
pub const ANSWER_NOT_FOUND: &str = "Answer not found.";

#[derive(Error, Debug)]
pub enum PredictionError {
    #[error("Invalid model response: {0}")]
    InvalidModelResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PredictionError>;
