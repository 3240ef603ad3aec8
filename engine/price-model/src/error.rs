//! Error types for the price model

use thiserror::Error;

/// Result type for price model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while projecting prices
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Invalid player snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("No projected scores supplied")]
    EmptyProjection,

    #[error("Projected price overflows at round {round}")]
    PriceOverflow { round: u32 },

    #[error("Configuration error: {0}")]
    Config(String),
}
