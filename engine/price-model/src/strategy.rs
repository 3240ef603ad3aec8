//! Common interface over the price projection formulas
//!
//! The two formulas are kept as separate strategies; their outputs are not
//! numerically comparable and must not be blended.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{PlayerSnapshot, PriceTrajectory};

/// Which price-update recurrence produced a trajectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionStrategy {
    /// `(score - breakeven) * multiplier * price / 10000`, quantized, unfloored
    MagicMultiplier,
    /// Weighted recent-score window against the AFL magic number, floored
    WeightedWindow,
}

/// Project a player's price given their projected scores
pub trait PriceProjector {
    fn strategy(&self) -> ProjectionStrategy;

    /// Round-by-round path, starting with round 0
    fn project(&self, snapshot: &PlayerSnapshot) -> Result<PriceTrajectory>;
}
