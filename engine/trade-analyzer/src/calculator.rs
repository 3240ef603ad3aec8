use price_model::{
    consistency_score, round_half_up, value_score, PlayerSnapshot, PriceProjector,
    TrajectoryModel,
};
use tracing::debug;

use crate::config::TradeScoreConfig;
use crate::error::{Result, TradeError};
use crate::explain;
use crate::models::*;

/// Average-score difference at which the scoring sub-score saturates
const SCORING_SATURATION: f64 = 20.0;

/// Price delta at which the cash price component saturates
const PRICE_SATURATION: f64 = 300_000.0;

/// Value delta (points per $100k) at which the cash value component saturates
const VALUE_SATURATION: f64 = 2.0;

/// Team value distance from league average that shifts the weights
pub const TEAM_VALUE_MARGIN: i64 = 500_000;

/// Weight moved between scoring and cash by the team value adjustment
const TEAM_VALUE_WEIGHT_SHIFT: f64 = 0.1;

/// Trade score calculator
#[derive(Debug, Clone, Default)]
pub struct TradeScoreCalculator {
    config: TradeScoreConfig,
    trajectory: TrajectoryModel,
}

impl TradeScoreCalculator {
    pub fn new(config: TradeScoreConfig) -> Self {
        let trajectory = TrajectoryModel::new(config.trajectory.clone());
        Self { config, trajectory }
    }

    pub fn config(&self) -> &TradeScoreConfig {
        &self.config
    }

    /// Score a request, filling omitted context from config defaults
    pub fn calculate(&self, request: &TradeScoreRequest) -> Result<TradeScoreResult> {
        let player_in = request.player_in.as_ref().ok_or(TradeError::MissingPlayer("player_in"))?;
        let player_out =
            request.player_out.as_ref().ok_or(TradeError::MissingPlayer("player_out"))?;

        self.calculate_trade_score(
            player_in,
            player_out,
            request.round_number.unwrap_or(self.config.default_round),
            request.team_value.unwrap_or(self.config.default_team_value),
            request.league_avg_value.unwrap_or(self.config.default_league_avg_value),
        )
    }

    /// Compare `player_in` against `player_out`
    pub fn calculate_trade_score(
        &self,
        player_in: &PlayerSnapshot,
        player_out: &PlayerSnapshot,
        round_number: u32,
        team_value: i64,
        league_avg_value: i64,
    ) -> Result<TradeScoreResult> {
        player_in
            .validate_for_projection()
            .map_err(|source| TradeError::InvalidPlayer { side: "player_in", source })?;
        player_out
            .validate_for_projection()
            .map_err(|source| TradeError::InvalidPlayer { side: "player_out", source })?;
        if round_number == 0 {
            return Err(TradeError::InvalidRound(round_number));
        }

        let avg_in = player_in.average_projected();
        let avg_out = player_out.average_projected();
        let score_diff = avg_in - avg_out;
        let scoring = scoring_score(score_diff);

        let value_diff =
            value_score(avg_in, player_in.price) - value_score(avg_out, player_out.price);
        let price_diff = player_out.price - player_in.price;
        let cash = cash_score(price_diff, value_diff);

        let upgrade_path = UpgradePath::from_price_delta(player_in.price - player_out.price);
        let season_match = SeasonStage::from_round(round_number);
        let team_value_delta = team_value
            .checked_sub(league_avg_value)
            .ok_or(TradeError::InvalidTeamValue { team_value, league_avg_value })?;
        let (scoring_weight, cash_weight) = blend_weights(season_match, team_value_delta);

        let overall =
            round_half_up(scoring * scoring_weight + cash * cash_weight).clamp(0.0, 100.0) as u32;
        let verdict = Verdict::from_score(overall);

        let factors = TradeFactors {
            average_score_difference: score_diff,
            price_difference: price_diff,
            value_difference: value_diff,
            scoring_weight,
            cash_weight,
            consistency_in: consistency_score(&player_in.projected_scores),
            consistency_out: consistency_score(&player_out.projected_scores),
        };

        let price_trend = PriceTrend {
            player_in: self.forecast(player_in)?,
            player_out: self.forecast(player_out)?,
        };

        debug!(
            "Trade score {} ({}): scoring {:.1} x {:.1}, cash {:.1} x {:.1}, {} {}",
            overall,
            verdict,
            scoring,
            scoring_weight,
            cash,
            cash_weight,
            upgrade_path.as_str(),
            season_match.as_str()
        );

        Ok(TradeScoreResult {
            trade_score: overall,
            score_breakdown: ScoreBreakdown {
                scoring_score: round_half_up(scoring) as u32,
                cash_score: round_half_up(cash) as u32,
                overall_score: overall,
            },
            upgrade_path,
            season_match,
            verdict,
            recommendation: explain::recommendation(overall, upgrade_path, season_match),
            explanations: explain::explanations(
                &factors,
                season_match,
                team_value_delta,
                player_in,
                player_out,
            ),
            price_trend,
            factors,
        })
    }

    /// Price path over the forecast window
    fn forecast(&self, player: &PlayerSnapshot) -> Result<Vec<price_model::PriceTrajectoryPoint>> {
        let window = player.truncated(self.config.forecast_rounds);
        Ok(self.trajectory.project(&window)?.points)
    }
}

/// Piecewise-linear map of the average-score difference onto 0-100
pub fn scoring_score(score_diff: f64) -> f64 {
    if score_diff >= SCORING_SATURATION {
        100.0
    } else if score_diff <= -SCORING_SATURATION {
        0.0
    } else {
        50.0 + (score_diff / SCORING_SATURATION) * 50.0
    }
}

/// Cash sub-score from price freed up and value gained
pub fn cash_score(price_diff: i64, value_diff: f64) -> f64 {
    let mut score = 50.0;

    let price_ratio = (price_diff.unsigned_abs() as f64 / PRICE_SATURATION).min(1.0);
    if price_diff > 0 {
        score += price_ratio * 25.0;
    } else {
        score -= price_ratio * 15.0;
    }

    let value_ratio = (value_diff.abs() / VALUE_SATURATION).min(1.0);
    if value_diff > 0.0 {
        score += value_ratio * 25.0;
    } else {
        score -= value_ratio * 35.0;
    }

    score.clamp(0.0, 100.0)
}

/// (scoring, cash) weights for the season stage and team value position
pub fn blend_weights(stage: SeasonStage, team_value_delta: i64) -> (f64, f64) {
    let (scoring, cash) = stage.base_weights();

    if team_value_delta > TEAM_VALUE_MARGIN {
        (scoring + TEAM_VALUE_WEIGHT_SHIFT, cash - TEAM_VALUE_WEIGHT_SHIFT)
    } else if team_value_delta < -TEAM_VALUE_MARGIN {
        (scoring - TEAM_VALUE_WEIGHT_SHIFT, cash + TEAM_VALUE_WEIGHT_SHIFT)
    } else {
        (scoring, cash)
    }
}
