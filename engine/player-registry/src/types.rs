use price_model::PlayerSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A player as known to the registry for the current round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Unique player ID (e.g., "CD_I1001032")
    pub player_id: String,

    /// Player name (e.g., "Marcus Bontempelli")
    pub name: String,

    /// Position (e.g., "MID", "DEF", "RUC", "FWD")
    pub position: String,

    /// Club abbreviation (e.g., "WB", "COLL")
    pub team: String,

    /// Current price in dollars
    pub price: i64,

    /// Current breakeven
    pub breakeven: i64,

    /// Actual scores this season, oldest first
    #[serde(default)]
    pub recent_scores: Vec<f64>,

    /// Injury/suspension flag
    #[serde(default)]
    pub is_red_dot: bool,
}

impl PlayerRecord {
    /// Latest actual score, if the player has played
    pub fn last_score(&self) -> Option<f64> {
        self.recent_scores.last().copied()
    }

    /// Snapshot for the calculators with the given projection
    pub fn snapshot(&self, projected_scores: Vec<f64>) -> PlayerSnapshot {
        PlayerSnapshot {
            price: self.price,
            breakeven: self.breakeven,
            projected_scores,
            recent_scores: self.recent_scores.clone(),
            is_red_dot: self.is_red_dot,
        }
    }
}

/// On-disk player file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerData {
    /// Round the prices and breakevens apply to
    pub round: u32,
    pub players: Vec<PlayerRecord>,
}

/// Errors that can occur during player lookup
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerLookupError {
    /// No player with this ID
    PlayerNotFound(String),

    /// Player exists but their data fails validation
    InvalidPlayer { player_id: String, reason: String },

    /// Player file could not be read or parsed
    LoadFailed(String),
}

impl fmt::Display for PlayerLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerLookupError::PlayerNotFound(id) => {
                write!(f, "Player '{id}' not found in registry")
            }
            PlayerLookupError::InvalidPlayer { player_id, reason } => {
                write!(f, "Player '{player_id}' has invalid data: {reason}")
            }
            PlayerLookupError::LoadFailed(reason) => {
                write!(f, "Failed to load player data: {reason}")
            }
        }
    }
}

impl std::error::Error for PlayerLookupError {}
