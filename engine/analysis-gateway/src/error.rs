//! Error types for the AnalysisGateway

use player_registry::PlayerLookupError;
use price_model::ModelError;
use price_predictor::PredictorError;
use thiserror::Error;
use trade_analyzer::TradeError;
use warp::http::StatusCode;

/// Errors that can occur in the AnalysisGateway
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0}")]
    Trade(#[from] TradeError),

    #[error("{0}")]
    Predictor(#[from] PredictorError),

    #[error("{0}")]
    Model(#[from] ModelError),

    #[error("{0}")]
    Lookup(#[from] PlayerLookupError),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Trade(_) | GatewayError::Model(_) | GatewayError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::Predictor(PredictorError::Model(_)) => StatusCode::BAD_REQUEST,
            GatewayError::Lookup(PlayerLookupError::PlayerNotFound(_)) => StatusCode::NOT_FOUND,
            GatewayError::Lookup(PlayerLookupError::InvalidPlayer { .. }) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl warp::reject::Reject for GatewayError {}

impl From<String> for GatewayError {
    fn from(err: String) -> Self {
        GatewayError::Internal(err)
    }
}

/// Result type for AnalysisGateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
