//! Price Predictor
//!
//! Projects a single player's price forward from projected scores using a
//! weighted window of recent scores and the round's system parameters
//! (magic number, beta weight, price sensitivity factor).

pub mod config;
pub mod error;
pub mod models;
pub mod params;
pub mod predictor;


pub use config::PredictorConfig;
pub use error::{PredictorError, Result};
pub use models::{PredictionRound, PricePrediction};
pub use params::{
    estimate_magic_number, ParameterSource, ResolvedParameters, SystemParameterRecord,
    SystemParameterStore, SystemParameters,
};
pub use predictor::PricePredictor;

/// Default AFL magic number
pub const DEFAULT_MAGIC_NUMBER: f64 = 3500.0;

/// Default weight of the previous price carried away each round
pub const DEFAULT_BETA_WEIGHT: f64 = 0.15;

/// Default divisor turning price change into breakeven shift
pub const DEFAULT_PRICE_SENSITIVITY_FACTOR: f64 = 150.0;

/// Prices never project below this
pub const DEFAULT_PRICE_FLOOR: i64 = 100_000;

/// Breakevens never project below this
pub const DEFAULT_BREAKEVEN_FLOOR: i64 = 0;

/// Window weights, most recent score first
pub const DEFAULT_WINDOW_WEIGHTS: [f64; 5] = [5.0, 4.0, 3.0, 2.0, 1.0];

/// Average round score the magic number estimator is anchored on
pub const ESTIMATOR_BASELINE_SCORE: f64 = 100.0;

/// Magic number change per point of average round score
pub const ESTIMATOR_POINTS_SCALE: f64 = 10.0;
