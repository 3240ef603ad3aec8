use serde::{Deserialize, Serialize};

use crate::params::ResolvedParameters;

/// One projected round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRound {
    pub round: u32,
    pub projected_score: f64,
    pub price_change: i64,
    pub new_price: i64,
    pub new_break_even: i64,
}

/// Multi-round price projection for one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePrediction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
    pub starting_price: i64,
    pub starting_break_even: i64,
    pub rounds: Vec<PredictionRound>,
    pub total_price_change: i64,
    pub final_price: i64,
    pub parameters: ResolvedParameters,
}
