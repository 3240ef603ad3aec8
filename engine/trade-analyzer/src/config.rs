//! Configuration for the trade score calculator

use price_model::TrajectoryConfig;
use serde::{Deserialize, Serialize};

use crate::{DEFAULT_FORECAST_ROUNDS, DEFAULT_LEAGUE_AVG_VALUE, DEFAULT_ROUND, DEFAULT_TEAM_VALUE};

/// Configuration for the trade score calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeScoreConfig {
    /// Round used when the request has none
    pub default_round: u32,

    /// Team value used when the request has none
    pub default_team_value: i64,

    /// League average used when the request has none
    pub default_league_avg_value: i64,

    /// Number of projected rounds in each price trend
    pub forecast_rounds: usize,

    /// Trajectory model used for the price trends
    pub trajectory: TrajectoryConfig,
}

impl Default for TradeScoreConfig {
    fn default() -> Self {
        Self {
            default_round: DEFAULT_ROUND,
            default_team_value: DEFAULT_TEAM_VALUE,
            default_league_avg_value: DEFAULT_LEAGUE_AVG_VALUE,
            forecast_rounds: DEFAULT_FORECAST_ROUNDS,
            trajectory: TrajectoryConfig::default(),
        }
    }
}
