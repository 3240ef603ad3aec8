//! Trade Analyzer
//!
//! Compares a player coming in against a player going out and produces a
//! 0-100 trade score. Scoring impact and cash impact are scored separately,
//! blended with season-stage weights, and explained line by line.

pub mod calculator;
pub mod config;
pub mod error;
pub mod explain;
pub mod models;

#[cfg(test)]
mod tests;

pub use calculator::TradeScoreCalculator;
pub use config::TradeScoreConfig;
pub use error::{Result, TradeError};
pub use models::{
    PriceTrend, ScoreBreakdown, SeasonStage, TradeFactors, TradeScoreRequest, TradeScoreResult,
    UpgradePath, Verdict,
};

/// Re-export commonly used types
pub use price_model::{PlayerSnapshot, PriceTrajectoryPoint};

/// Default round when the request omits one
pub const DEFAULT_ROUND: u32 = 8;

/// Default team value when the request omits one
pub const DEFAULT_TEAM_VALUE: i64 = 15_000_000;

/// Default league average team value
pub const DEFAULT_LEAGUE_AVG_VALUE: i64 = 14_500_000;

/// Rounds forecast for each player's price trend
pub const DEFAULT_FORECAST_ROUNDS: usize = 5;
