use tracing::debug;

use crate::config::{SmoothingMode, TrajectoryConfig};
use crate::error::{ModelError, Result};
use crate::metrics::{mean, round_half_up};
use crate::strategy::{PriceProjector, ProjectionStrategy};
use crate::types::{PlayerSnapshot, PriceTrajectory, PriceTrajectoryPoint};

/// Divisor applied to `diff * multiplier * price`
const PRICE_CHANGE_SCALE: f64 = 10_000.0;

/// Round-by-round price model driven by projected score versus breakeven.
///
/// No floor or ceiling is applied to price or breakeven here; the weighted
/// window predictor floors both, and the two are intentionally left as-is.
#[derive(Debug, Clone, Default)]
pub struct TrajectoryModel {
    config: TrajectoryConfig,
}

impl TrajectoryModel {
    pub fn new(config: TrajectoryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrajectoryConfig {
        &self.config
    }

    /// Quantized price change for a single round
    pub fn price_change(&self, score: f64, breakeven: i64, price: i64) -> i64 {
        let score_difference = score - breakeven as f64;
        let raw =
            score_difference * self.config.magic_multiplier * price as f64 / PRICE_CHANGE_SCALE;
        let quantum = self.config.price_quantum as f64;
        (round_half_up(raw / quantum) * quantum) as i64
    }

    /// Breakeven after drifting toward `score`
    pub fn next_breakeven(&self, breakeven: i64, score: f64) -> i64 {
        let current = breakeven as f64;
        round_half_up(current + (score - current) * self.config.breakeven_drift) as i64
    }

    /// Scores that drive each round after smoothing
    pub fn effective_scores(&self, snapshot: &PlayerSnapshot) -> Vec<f64> {
        match self.config.smoothing {
            SmoothingMode::Raw => snapshot.projected_scores.clone(),
            SmoothingMode::RollingAverage { window } => {
                rolling_averages(&snapshot.recent_scores, &snapshot.projected_scores, window)
            }
        }
    }

    /// Simulate the trajectory from `price`/`breakeven` over `scores`
    pub fn trajectory(
        &self,
        price: i64,
        breakeven: i64,
        scores: &[f64],
    ) -> Result<Vec<PriceTrajectoryPoint>> {
        let mut points = Vec::with_capacity(scores.len() + 1);
        points.push(PriceTrajectoryPoint::start(price, breakeven));

        let mut current_price = price;
        let mut current_breakeven = breakeven;

        for (i, &score) in scores.iter().enumerate() {
            let round = i as u32 + 1;
            let price_change = self.price_change(score, current_breakeven, current_price);
            current_price = current_price
                .checked_add(price_change)
                .ok_or(ModelError::PriceOverflow { round })?;
            current_breakeven = self.next_breakeven(current_breakeven, score);

            points.push(PriceTrajectoryPoint {
                round,
                price: current_price,
                price_change,
                breakeven: current_breakeven,
            });
        }

        Ok(points)
    }
}

impl PriceProjector for TrajectoryModel {
    fn strategy(&self) -> ProjectionStrategy {
        ProjectionStrategy::MagicMultiplier
    }

    fn project(&self, snapshot: &PlayerSnapshot) -> Result<PriceTrajectory> {
        snapshot.validate_for_projection()?;
        self.config.validate()?;

        let scores = self.effective_scores(snapshot);
        let points = self.trajectory(snapshot.price, snapshot.breakeven, &scores)?;

        debug!(
            "Projected {} rounds from {} (breakeven {}): final {}",
            scores.len(),
            snapshot.price,
            snapshot.breakeven,
            points.last().map_or(snapshot.price, |p| p.price)
        );

        Ok(PriceTrajectory { strategy: self.strategy(), points })
    }
}

/// For each projected score, the mean of the trailing `window` scores of
/// `history ++ projected` ending at that score.
fn rolling_averages(history: &[f64], projected: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    let series: Vec<f64> = history.iter().chain(projected).copied().collect();

    (0..projected.len())
        .map(|i| {
            let end = history.len() + i + 1;
            let start = end.saturating_sub(window);
            mean(&series[start..end])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_change_quantized() {
        let model = TrajectoryModel::default();
        // 20 * 1.25 * 300000 / 10000 = 750 -> 7.5 hundreds -> 800
        assert_eq!(model.price_change(90.0, 70, 300_000), 800);
        // 18 * 1.25 * 300800 / 10000 = 676.8 -> 700
        assert_eq!(model.price_change(90.0, 72, 300_800), 700);
        // -7.5 hundreds rounds half up to -700
        assert_eq!(model.price_change(50.0, 70, 300_000), -700);
    }

    #[test]
    fn test_next_breakeven_drift() {
        let model = TrajectoryModel::default();
        assert_eq!(model.next_breakeven(70, 90.0), 72);
        assert_eq!(model.next_breakeven(72, 90.0), 74);
        assert_eq!(model.next_breakeven(100, 0.0), 90);
        assert_eq!(model.next_breakeven(-20, 0.0), -18);
    }

    #[test]
    fn test_rolling_averages_prepend_history() {
        let averages = rolling_averages(&[60.0, 90.0], &[120.0, 30.0], 3);
        assert_eq!(averages, vec![90.0, 80.0]);
    }

    #[test]
    fn test_rolling_averages_short_history() {
        let averages = rolling_averages(&[], &[100.0, 50.0, 90.0, 30.0], 3);
        assert_eq!(averages, vec![100.0, 75.0, 80.0, 170.0 / 3.0]);
    }

    #[test]
    fn test_rolling_trajectory_uses_smoothed_scores() {
        let model = TrajectoryModel::new(TrajectoryConfig::rolling());
        let snapshot =
            PlayerSnapshot::new(400_000, 80, vec![120.0]).with_recent_scores(vec![60.0, 90.0]);

        let trajectory = model.project(&snapshot).unwrap();

        // Smoothed score 90 against breakeven 80: 10 * 1.25 * 40 = 500
        assert_eq!(trajectory.points[1].price_change, 500);
        assert_eq!(trajectory.points[1].breakeven, 81);
    }

    #[test]
    fn test_no_floor_applied() {
        let model = TrajectoryModel::default();
        let points = model.trajectory(150_000, 200, &[0.0; 4]).unwrap();

        assert!(points.iter().skip(1).all(|p| p.price_change < 0));
        assert!(points.last().unwrap().price < 150_000);
    }

    #[test]
    fn test_price_overflow_is_an_error() {
        let model = TrajectoryModel::default();
        let snapshot = PlayerSnapshot::new(i64::MAX - 1_000, 0, vec![100.0; 3]);

        assert_eq!(model.project(&snapshot), Err(ModelError::PriceOverflow { round: 1 }));

        let snapshot = PlayerSnapshot::new(9_000_000_000_000_000_000, 0, vec![100.0; 3]);
        assert!(matches!(model.project(&snapshot), Err(ModelError::PriceOverflow { .. })));
    }
}
