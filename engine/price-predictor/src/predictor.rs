use price_model::{
    round_half_up, PlayerSnapshot, PriceProjector, PriceTrajectory, PriceTrajectoryPoint,
    ProjectionStrategy,
};
use tracing::debug;

use crate::config::PredictorConfig;
use crate::error::Result;
use crate::models::{PredictionRound, PricePrediction};
use crate::params::{ParameterSource, ResolvedParameters};

/// Weighted-window price predictor.
///
/// Each round the just-projected score leads the window and then joins the
/// recent scores for later rounds. Price is floored at `price_floor` and
/// breakeven at `breakeven_floor`.
#[derive(Debug, Clone)]
pub struct PricePredictor {
    config: PredictorConfig,
    parameters: ResolvedParameters,
}

impl PricePredictor {
    /// Predictor running on the configured default parameters
    pub fn new(config: PredictorConfig) -> Self {
        let parameters =
            ResolvedParameters {
                round: 0,
                source: ParameterSource::Default,
                parameters: config.defaults,
            };
        Self { config, parameters }
    }

    /// Use parameters resolved for a specific round
    pub fn with_parameters(mut self, parameters: ResolvedParameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn parameters(&self) -> &ResolvedParameters {
        &self.parameters
    }

    /// Project `snapshot` forward over its projected scores
    pub fn predict(
        &self,
        player_id: Option<String>,
        snapshot: &PlayerSnapshot,
    ) -> Result<PricePrediction> {
        snapshot.validate_for_projection()?;
        self.config.validate()?;
        self.parameters.parameters.validate()?;

        let params = &self.parameters.parameters;
        let window_size = self.config.window_weights.len();

        // Most recent first
        let mut recent: Vec<f64> = snapshot.recent_scores.iter().rev().copied().collect();
        let mut current_price = snapshot.price;
        let mut rounds = Vec::with_capacity(snapshot.projected_scores.len());

        for (i, &projected_score) in snapshot.projected_scores.iter().enumerate() {
            let window =
                std::iter::once(projected_score).chain(recent.iter().copied()).take(window_size);

            let (weighted_sum, weight_total) = window
                .zip(&self.config.window_weights)
                .fold((0.0, 0.0), |(sum, total), (score, weight)| {
                    (sum + weight * score, total + weight)
                });

            let raw_price = (1.0 - params.beta_weight) * current_price as f64
                + params.magic_number
                - weighted_sum;
            let new_price = (round_half_up(raw_price) as i64).max(self.config.price_floor);
            let price_change = new_price - current_price;

            let weighted_avg = weighted_sum / weight_total;
            let new_break_even = (round_half_up(
                weighted_avg + price_change as f64 / params.price_sensitivity_factor,
            ) as i64)
                .max(self.config.breakeven_floor);

            rounds.push(PredictionRound {
                round: i as u32 + 1,
                projected_score,
                price_change,
                new_price,
                new_break_even,
            });

            current_price = new_price;
            recent.insert(0, projected_score);
        }

        let total_price_change = rounds.iter().map(|r| r.price_change).sum();

        debug!(
            "Predicted {} rounds from {} (breakeven {}): final {} ({:+}), magic {} [{:?}]",
            rounds.len(),
            snapshot.price,
            snapshot.breakeven,
            current_price,
            total_price_change,
            params.magic_number,
            self.parameters.source
        );

        Ok(PricePrediction {
            player_id,
            starting_price: snapshot.price,
            starting_break_even: snapshot.breakeven,
            rounds,
            total_price_change,
            final_price: current_price,
            parameters: self.parameters,
        })
    }
}

impl Default for PricePredictor {
    fn default() -> Self {
        Self::new(PredictorConfig::default())
    }
}

impl PriceProjector for PricePredictor {
    fn strategy(&self) -> ProjectionStrategy {
        ProjectionStrategy::WeightedWindow
    }

    fn project(&self, snapshot: &PlayerSnapshot) -> price_model::Result<PriceTrajectory> {
        let prediction = self.predict(None, snapshot)?;

        let start = PriceTrajectoryPoint::start(snapshot.price, snapshot.breakeven);
        let points = std::iter::once(start)
            .chain(prediction.rounds.iter().map(|r| PriceTrajectoryPoint {
                round: r.round,
                price: r.new_price,
                price_change: r.price_change,
                breakeven: r.new_break_even,
            }))
            .collect();

        Ok(PriceTrajectory { strategy: self.strategy(), points })
    }
}
