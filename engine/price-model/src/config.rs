//! Configuration for the price trajectory model

use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_BREAKEVEN_DRIFT, DEFAULT_MAGIC_MULTIPLIER, DEFAULT_PRICE_QUANTUM,
    DEFAULT_ROLLING_WINDOW,
};

/// Tunables for the trajectory model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrajectoryConfig {
    /// Multiplier on (score - breakeven), not the AFL magic number
    pub magic_multiplier: f64,

    /// Breakeven drift toward the latest score per round (0.1 = 10%)
    pub breakeven_drift: f64,

    /// Price change quantum in currency units
    pub price_quantum: i64,

    /// Which score drives each round's update
    pub smoothing: SmoothingMode,
}

/// Score smoothing applied before the price-change formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum SmoothingMode {
    /// Use each projected score as-is
    Raw,
    /// Mean of the trailing `window` actual+projected scores
    RollingAverage { window: usize },
}

impl Default for SmoothingMode {
    fn default() -> Self {
        SmoothingMode::Raw
    }
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            magic_multiplier: DEFAULT_MAGIC_MULTIPLIER,
            breakeven_drift: DEFAULT_BREAKEVEN_DRIFT,
            price_quantum: DEFAULT_PRICE_QUANTUM,
            smoothing: SmoothingMode::Raw,
        }
    }
}

impl TrajectoryConfig {
    /// Rolling-average variant with the default window
    pub fn rolling() -> Self {
        Self::rolling_with_window(DEFAULT_ROLLING_WINDOW)
    }

    /// Rolling-average variant with an explicit window
    pub fn rolling_with_window(window: usize) -> Self {
        Self { smoothing: SmoothingMode::RollingAverage { window }, ..Self::default() }
    }

    /// Reject settings the update rule cannot run with
    pub fn validate(&self) -> crate::Result<()> {
        if self.price_quantum <= 0 {
            return Err(crate::ModelError::Config("price_quantum must be positive".to_string()));
        }
        if !self.magic_multiplier.is_finite() || !self.breakeven_drift.is_finite() {
            return Err(crate::ModelError::Config("multipliers must be finite".to_string()));
        }
        if let SmoothingMode::RollingAverage { window: 0 } = self.smoothing {
            return Err(crate::ModelError::Config("rolling window must be at least 1".to_string()));
        }
        Ok(())
    }
}
