//! Error types for the trade analyzer

use price_model::ModelError;
use thiserror::Error;

/// Result type for trade analyzer operations
pub type Result<T> = std::result::Result<T, TradeError>;

/// Errors that can occur while scoring a trade
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TradeError {
    #[error("{0} is required")]
    MissingPlayer(&'static str),

    #[error("Invalid {side}: {source}")]
    InvalidPlayer {
        side: &'static str,
        #[source]
        source: ModelError,
    },

    #[error("Invalid round number: {0}")]
    InvalidRound(u32),

    #[error("Team value {team_value} is out of range against league average {league_avg_value}")]
    InvalidTeamValue { team_value: i64, league_avg_value: i64 },

    #[error("Price model error: {0}")]
    Model(#[from] ModelError),
}
