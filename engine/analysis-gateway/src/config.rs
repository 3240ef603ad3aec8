//! Configuration for the AnalysisGateway

use price_predictor::PredictorConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use trade_analyzer::TradeScoreConfig;

use crate::error::GatewayResult;
use crate::{DEFAULT_PORT, ENV_PREFIX};

/// Main configuration for the AnalysisGateway
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Input data locations
    pub data: DataConfig,

    /// Trade score calculator settings
    pub trade: TradeScoreConfig,

    /// Price predictor settings
    pub predictor: PredictorConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,
}

/// Input data locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Current-round player file
    pub players_path: String,

    /// System parameter records; defaults/estimates are used when absent
    pub system_parameters_path: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is unset
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: DEFAULT_PORT }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            players_path: "data/players/round_players.json".to_string(),
            system_parameters_path: Some("data/system_parameters.json".to_string()),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

impl GatewayConfig {
    /// Get the server address
    pub fn server_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }

    /// Optional TOML file overlaid by `ANALYSIS__*` env vars; anything unset keeps its default
    pub fn load(path: &str) -> GatewayResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::new(path, config::FileFormat::Toml).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: GatewayConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file only
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: GatewayConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check component settings before the server starts
    pub fn validate(&self) -> GatewayResult<()> {
        self.trade.trajectory.validate()?;
        self.predictor.validate()?;
        if self.trade.forecast_rounds == 0 {
            return Err(crate::GatewayError::Validation(
                "trade.forecast_rounds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    // `load` reads the process environment; tests that call it take turns
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.trade.default_round, 8);
        assert_eq!(config.predictor.price_floor, 100_000);
        assert!(config.validate().is_ok());
        assert!(config.server_addr().is_ok());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let _guard = env_lock();
        let config = GatewayConfig::load("does/not/exist.toml").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.trade.forecast_rounds, 5);
    }

    #[test]
    fn test_load_partial_toml() {
        let _guard = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9100\n\n[trade]\nforecast_rounds = 3\n\n[predictor.defaults]\nmagic_number = 3650.0\n",
        )
        .unwrap();

        let config = GatewayConfig::load(path.to_str().unwrap()).unwrap();

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.trade.forecast_rounds, 3);
        assert_eq!(config.predictor.defaults.magic_number, 3650.0);
        assert_eq!(config.predictor.defaults.beta_weight, 0.15);
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.toml");
        let path = path.to_str().unwrap();

        let mut config = GatewayConfig::default();
        config.server.port = 9200;
        config.save_to_file(path).unwrap();

        let loaded = GatewayConfig::load_from_file(path).unwrap();
        assert_eq!(loaded.server.port, 9200);
        assert_eq!(loaded.trade, config.trade);
    }

    #[test]
    fn test_env_overrides_nested_component_settings() {
        let _guard = env_lock();
        std::env::set_var("ANALYSIS__TRADE__TRAJECTORY__MAGIC_MULTIPLIER", "1.5");
        std::env::set_var("ANALYSIS__PREDICTOR__BREAKEVEN_FLOOR", "-25");
        let config = GatewayConfig::load("does/not/exist.toml");
        std::env::remove_var("ANALYSIS__TRADE__TRAJECTORY__MAGIC_MULTIPLIER");
        std::env::remove_var("ANALYSIS__PREDICTOR__BREAKEVEN_FLOOR");

        let config = config.unwrap();
        assert_eq!(config.trade.trajectory.magic_multiplier, 1.5);
        assert_eq!(config.predictor.breakeven_floor, -25);
        assert_eq!(config.trade.trajectory.price_quantum, 100);
    }

    #[test]
    fn test_env_override_rejects_bad_value() {
        let _guard = env_lock();
        std::env::set_var("ANALYSIS__TRADE__TRAJECTORY__PRICE_QUANTUM", "0");
        let zero_quantum = GatewayConfig::load("does/not/exist.toml");
        std::env::set_var("ANALYSIS__TRADE__TRAJECTORY__PRICE_QUANTUM", "not-a-number");
        let unparsable = GatewayConfig::load("does/not/exist.toml");
        std::env::remove_var("ANALYSIS__TRADE__TRAJECTORY__PRICE_QUANTUM");

        assert!(matches!(zero_quantum, Err(crate::GatewayError::Model(_))));
        assert!(matches!(unparsable, Err(crate::GatewayError::Config(_))));
    }
}
