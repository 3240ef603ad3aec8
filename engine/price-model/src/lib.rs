//! Price Model
//!
//! Round-by-round player price projection driven by projected score versus
//! breakeven, plus the scoring helpers (value, consistency) shared by the
//! trade analyzer and the price predictor.

pub mod config;
pub mod error;
pub mod metrics;
pub mod strategy;
pub mod trajectory;
pub mod types;


pub use config::{SmoothingMode, TrajectoryConfig};
pub use error::{ModelError, Result};
pub use metrics::{consistency_score, mean, round_half_up, value_score};
pub use strategy::{PriceProjector, ProjectionStrategy};
pub use trajectory::TrajectoryModel;
pub use types::{PlayerSnapshot, PriceTrajectory, PriceTrajectoryPoint};

/// Default multiplier applied to score minus breakeven
pub const DEFAULT_MAGIC_MULTIPLIER: f64 = 1.25;

/// Fraction of the gap to the latest score that breakeven moves each round
pub const DEFAULT_BREAKEVEN_DRIFT: f64 = 0.1;

/// Price changes are quantized to this many currency units
pub const DEFAULT_PRICE_QUANTUM: i64 = 100;

/// Default trailing window for the rolling-average variant
pub const DEFAULT_ROLLING_WINDOW: usize = 3;
