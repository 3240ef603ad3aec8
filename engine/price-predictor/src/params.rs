//! Round-keyed system parameters
//!
//! Records are loaded once and read-only afterwards; callers receive the
//! resolved parameters as a plain value.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{PredictorError, Result};
use crate::{
    DEFAULT_BETA_WEIGHT, DEFAULT_MAGIC_NUMBER, DEFAULT_PRICE_SENSITIVITY_FACTOR,
    ESTIMATOR_BASELINE_SCORE, ESTIMATOR_POINTS_SCALE,
};

/// Tunables for the weighted window recurrence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemParameters {
    pub magic_number: f64,
    pub beta_weight: f64,
    pub price_sensitivity_factor: f64,
}

impl Default for SystemParameters {
    fn default() -> Self {
        Self {
            magic_number: DEFAULT_MAGIC_NUMBER,
            beta_weight: DEFAULT_BETA_WEIGHT,
            price_sensitivity_factor: DEFAULT_PRICE_SENSITIVITY_FACTOR,
        }
    }
}

impl SystemParameters {
    pub fn validate(&self) -> Result<()> {
        if !self.magic_number.is_finite() || !self.beta_weight.is_finite() {
            return Err(PredictorError::InvalidParameters("values must be finite".to_string()));
        }
        if !self.price_sensitivity_factor.is_finite() || self.price_sensitivity_factor == 0.0 {
            return Err(PredictorError::InvalidParameters(
                "price_sensitivity_factor must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parameters as stored for one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemParameterRecord {
    pub round: u32,
    pub effective_at: DateTime<Utc>,
    #[serde(flatten)]
    pub parameters: SystemParameters,
}

/// Where resolved parameters came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterSource {
    Stored,
    Estimated,
    Default,
}

/// Parameters chosen for a round plus their origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedParameters {
    pub round: u32,
    pub source: ParameterSource,
    #[serde(flatten)]
    pub parameters: SystemParameters,
}

/// `3500 + (avg - 100) * 10`; a rough heuristic, not a certified formula
pub fn estimate_magic_number(round_average_score: f64) -> f64 {
    DEFAULT_MAGIC_NUMBER + (round_average_score - ESTIMATOR_BASELINE_SCORE) * ESTIMATOR_POINTS_SCALE
}

/// Read-only store of parameter records keyed by round
#[derive(Debug, Clone, Default)]
pub struct SystemParameterStore {
    records: BTreeMap<u32, Vec<SystemParameterRecord>>,
    defaults: SystemParameters,
}

impl SystemParameterStore {
    /// Empty store falling back to `defaults`
    pub fn new(defaults: SystemParameters) -> Self {
        Self { records: BTreeMap::new(), defaults }
    }

    /// Build a store from records, rejecting invalid ones
    pub fn from_records(
        defaults: SystemParameters,
        records: impl IntoIterator<Item = SystemParameterRecord>,
    ) -> Result<Self> {
        let mut store = Self::new(defaults);
        for record in records {
            record.parameters.validate()?;
            store.records.entry(record.round).or_default().push(record);
        }
        Ok(store)
    }

    /// Load records from a JSON array file
    pub async fn load_from_file<P: AsRef<Path>>(
        defaults: SystemParameters,
        path: P,
    ) -> Result<Self> {
        info!("Loading system parameters from: {:?}", path.as_ref());

        let content = tokio::fs::read_to_string(&path).await?;
        let records: Vec<SystemParameterRecord> = serde_json::from_str(&content)?;
        let store = Self::from_records(defaults, records)?;

        info!("Loaded system parameters for {} rounds", store.round_count());
        Ok(store)
    }

    pub fn round_count(&self) -> usize {
        self.records.len()
    }

    pub fn defaults(&self) -> &SystemParameters {
        &self.defaults
    }

    /// Most recently effective record for exactly `round`
    pub fn latest_for_round(&self, round: u32) -> Option<&SystemParameterRecord> {
        self.records.get(&round)?.iter().max_by_key(|r| r.effective_at)
    }

    /// Stored record for the round, else the estimator when the round's
    /// average score is known, else the defaults.
    pub fn resolve(&self, round: u32, round_average_score: Option<f64>) -> ResolvedParameters {
        if let Some(record) = self.latest_for_round(round) {
            return ResolvedParameters {
                round,
                source: ParameterSource::Stored,
                parameters: record.parameters,
            };
        }

        match round_average_score {
            Some(avg) if avg.is_finite() => {
                let magic_number = estimate_magic_number(avg);
                warn!(
                    "No system parameters for round {}, estimated magic number {:.1} from average score {:.1}",
                    round, magic_number, avg
                );
                ResolvedParameters {
                    round,
                    source: ParameterSource::Estimated,
                    parameters: SystemParameters { magic_number, ..self.defaults },
                }
            }
            _ => {
                warn!("No system parameters for round {}, using defaults", round);
                ResolvedParameters {
                    round,
                    source: ParameterSource::Default,
                    parameters: self.defaults,
                }
            }
        }
    }
}
