//! Configuration for the price predictor

use serde::{Deserialize, Serialize};

use crate::error::{PredictorError, Result};
use crate::params::SystemParameters;
use crate::{DEFAULT_BREAKEVEN_FLOOR, DEFAULT_PRICE_FLOOR, DEFAULT_WINDOW_WEIGHTS};

/// Configuration for the price predictor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Minimum projected price
    pub price_floor: i64,

    /// Minimum projected breakeven
    pub breakeven_floor: i64,

    /// Weights over the score window, most recent first; its length is the window size
    pub window_weights: Vec<f64>,

    /// Parameters used when no record exists for a round
    pub defaults: SystemParameters,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            price_floor: DEFAULT_PRICE_FLOOR,
            breakeven_floor: DEFAULT_BREAKEVEN_FLOOR,
            window_weights: DEFAULT_WINDOW_WEIGHTS.to_vec(),
            defaults: SystemParameters::default(),
        }
    }
}

impl PredictorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.window_weights.is_empty() {
            return Err(PredictorError::Config("window_weights must not be empty".to_string()));
        }
        if self.window_weights.iter().any(|w| !w.is_finite() || *w <= 0.0) {
            return Err(PredictorError::Config("window weights must be positive".to_string()));
        }
        self.defaults.validate()
    }
}
