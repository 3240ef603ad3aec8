//! Request orchestration: resolve inputs, run the calculators

use std::sync::Arc;

use player_registry::{PlayerRecord, PlayerRegistry};
use price_model::{PlayerSnapshot, PriceProjector, PriceTrajectory, SmoothingMode, TrajectoryModel};
use price_predictor::{PricePrediction, PricePredictor, PredictorConfig, SystemParameterStore};
use serde::{Deserialize, Serialize};
use tracing::info;
use trade_analyzer::{TradeScoreCalculator, TradeScoreRequest, TradeScoreResult};

use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};

/// Single-player price prediction request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePredictionRequest {
    pub player_id: String,
    pub projected_scores: Vec<f64>,
    /// Round whose system parameters apply; defaults to the registry's round
    #[serde(default)]
    pub round: Option<u32>,
}

/// Direct trajectory request for a caller-supplied snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryRequest {
    pub player: Option<PlayerSnapshot>,
    /// Use the rolling-average variant with this window
    #[serde(default)]
    pub smoothing_window: Option<usize>,
}

/// Shared, read-only analysis state
#[derive(Clone)]
pub struct AnalysisService {
    registry: Arc<PlayerRegistry>,
    parameters: Arc<SystemParameterStore>,
    trade_calculator: Arc<TradeScoreCalculator>,
    trajectory_model: TrajectoryModel,
    predictor_config: PredictorConfig,
}

impl AnalysisService {
    pub fn new(
        config: &GatewayConfig,
        registry: Arc<PlayerRegistry>,
        parameters: Arc<SystemParameterStore>,
    ) -> Self {
        Self {
            registry,
            parameters,
            trade_calculator: Arc::new(TradeScoreCalculator::new(config.trade.clone())),
            trajectory_model: TrajectoryModel::new(config.trade.trajectory.clone()),
            predictor_config: config.predictor.clone(),
        }
    }

    /// Load registry and parameter store from the configured paths
    pub async fn from_config(config: &GatewayConfig) -> GatewayResult<Self> {
        let mut registry = PlayerRegistry::new();
        registry.load_from_file(&config.data.players_path).await?;

        let parameters = match &config.data.system_parameters_path {
            Some(path) if std::path::Path::new(path).exists() => {
                SystemParameterStore::load_from_file(config.predictor.defaults, path).await?
            }
            _ => {
                info!("No system parameter file, using defaults and estimates");
                SystemParameterStore::new(config.predictor.defaults)
            }
        };

        Ok(Self::new(config, Arc::new(registry), Arc::new(parameters)))
    }

    pub fn registry(&self) -> &PlayerRegistry {
        &self.registry
    }

    /// Score a trade
    pub fn trade_score(&self, request: &TradeScoreRequest) -> GatewayResult<TradeScoreResult> {
        Ok(self.trade_calculator.calculate(request)?)
    }

    /// Forecast a registered player's price with the round's parameters
    pub fn predict_price(
        &self,
        request: &PricePredictionRequest,
    ) -> GatewayResult<PricePrediction> {
        let snapshot =
            self.registry.snapshot(&request.player_id, request.projected_scores.clone())?;

        let round = request.round.or(self.registry.current_round()).unwrap_or(1);
        let resolved = self.parameters.resolve(round, self.registry.round_average_score());

        let predictor =
            PricePredictor::new(self.predictor_config.clone()).with_parameters(resolved);
        Ok(predictor.predict(Some(request.player_id.clone()), &snapshot)?)
    }

    /// Magic-multiplier trajectory for a supplied snapshot
    pub fn trajectory(&self, request: &TrajectoryRequest) -> GatewayResult<PriceTrajectory> {
        let player = request
            .player
            .as_ref()
            .ok_or_else(|| GatewayError::Validation("player is required".to_string()))?;

        let mut config = self.trajectory_model.config().clone();
        if let Some(window) = request.smoothing_window {
            config.smoothing = SmoothingMode::RollingAverage { window };
        }

        Ok(TrajectoryModel::new(config).project(player)?)
    }

    /// Registry record for a player
    pub fn player(&self, player_id: &str) -> GatewayResult<PlayerRecord> {
        Ok(self.registry.get_by_id(player_id)?.clone())
    }
}
