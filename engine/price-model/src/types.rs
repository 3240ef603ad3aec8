use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::strategy::ProjectionStrategy;

/// Point-in-time view of a player used by every calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Current market value in currency units
    pub price: i64,

    /// Score needed this round to avoid a price drop (may be negative)
    pub breakeven: i64,

    /// Projected scores for upcoming rounds, soonest first
    #[serde(rename = "proj_scores")]
    pub projected_scores: Vec<f64>,

    /// Actual scores already played, oldest first
    #[serde(default)]
    pub recent_scores: Vec<f64>,

    /// Elevated injury/suspension risk
    #[serde(default)]
    pub is_red_dot: bool,
}

impl PlayerSnapshot {
    pub fn new(price: i64, breakeven: i64, projected_scores: Vec<f64>) -> Self {
        Self { price, breakeven, projected_scores, recent_scores: Vec::new(), is_red_dot: false }
    }

    pub fn with_recent_scores(mut self, recent_scores: Vec<f64>) -> Self {
        self.recent_scores = recent_scores;
        self
    }

    pub fn with_red_dot(mut self, is_red_dot: bool) -> Self {
        self.is_red_dot = is_red_dot;
        self
    }

    /// Check price and score sanity
    pub fn validate(&self) -> Result<()> {
        if self.price <= 0 {
            return Err(ModelError::InvalidSnapshot(format!(
                "price must be positive, got {}",
                self.price
            )));
        }
        if let Some(score) =
            self.projected_scores.iter().chain(&self.recent_scores).find(|s| !s.is_finite())
        {
            return Err(ModelError::InvalidSnapshot(format!("score {score} is not finite")));
        }
        Ok(())
    }

    /// Like [`validate`](Self::validate) but also requires projected scores
    pub fn validate_for_projection(&self) -> Result<()> {
        self.validate()?;
        if self.projected_scores.is_empty() {
            return Err(ModelError::EmptyProjection);
        }
        Ok(())
    }

    /// Mean of the projected scores (0 when none)
    pub fn average_projected(&self) -> f64 {
        crate::metrics::mean(&self.projected_scores)
    }

    /// Same snapshot limited to the first `rounds` projected scores
    pub fn truncated(&self, rounds: usize) -> Self {
        let mut snapshot = self.clone();
        snapshot.projected_scores.truncate(rounds);
        snapshot
    }
}

/// One round of a projected price path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTrajectoryPoint {
    pub round: u32,
    pub price: i64,
    pub price_change: i64,
    pub breakeven: i64,
}

impl PriceTrajectoryPoint {
    /// Round 0: the starting state
    pub fn start(price: i64, breakeven: i64) -> Self {
        Self { round: 0, price, price_change: 0, breakeven }
    }
}

/// Full projected path, round 0 included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTrajectory {
    pub strategy: ProjectionStrategy,
    pub points: Vec<PriceTrajectoryPoint>,
}

impl PriceTrajectory {
    pub fn starting_price(&self) -> Option<i64> {
        self.points.first().map(|p| p.price)
    }

    pub fn final_price(&self) -> Option<i64> {
        self.points.last().map(|p| p.price)
    }

    /// Sum of every round's change
    pub fn total_change(&self) -> i64 {
        self.points.iter().map(|p| p.price_change).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_wire_names() {
        let json = r#"{"price": 500000, "breakeven": -12, "proj_scores": [80, 0, 95.5]}"#;
        let snapshot: PlayerSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.price, 500_000);
        assert_eq!(snapshot.breakeven, -12);
        assert_eq!(snapshot.projected_scores, vec![80.0, 0.0, 95.5]);
        assert!(snapshot.recent_scores.is_empty());
        assert!(!snapshot.is_red_dot);
    }

    #[test]
    fn test_validate_rejects_non_positive_price() {
        let snapshot = PlayerSnapshot::new(0, 50, vec![60.0]);
        assert!(matches!(snapshot.validate(), Err(ModelError::InvalidSnapshot(_))));

        let snapshot = PlayerSnapshot::new(-100, 50, vec![60.0]);
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn test_validate_for_projection_requires_scores() {
        let snapshot = PlayerSnapshot::new(300_000, 50, vec![]);
        assert!(snapshot.validate().is_ok());
        assert_eq!(snapshot.validate_for_projection(), Err(ModelError::EmptyProjection));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let snapshot = PlayerSnapshot::new(300_000, 50, vec![60.0, f64::NAN]);
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn test_zero_and_negative_scores_are_valid() {
        let snapshot = PlayerSnapshot::new(300_000, 50, vec![0.0, -3.0]);
        assert!(snapshot.validate_for_projection().is_ok());
    }
}
