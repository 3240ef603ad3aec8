//! Error types for the price predictor

use price_model::ModelError;
use thiserror::Error;

/// Result type for price predictor operations
pub type Result<T> = std::result::Result<T, PredictorError>;

/// Errors that can occur while predicting prices
#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("Invalid player snapshot: {0}")]
    Model(#[from] ModelError),

    #[error("Invalid system parameters: {0}")]
    InvalidParameters(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<PredictorError> for ModelError {
    fn from(err: PredictorError) -> Self {
        match err {
            PredictorError::Model(inner) => inner,
            other => ModelError::Config(other.to_string()),
        }
    }
}
