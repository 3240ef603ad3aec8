//! AnalysisGateway - REST API for the trade and price analysis engine
//!
//! Resolves player snapshots and round parameters, runs the calculators and
//! wraps results in the `{status: "ok" | "error", ...}` envelope the mobile
//! and web clients expect.

pub mod config;
pub mod error;
pub mod rest_api;
pub mod service;

pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayResult};
pub use service::AnalysisService;

/// Version of the AnalysisGateway API
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8082;

/// Default config file location
pub const DEFAULT_CONFIG_PATH: &str = "config/analysis.toml";

/// Prefix for environment overrides (e.g. `ANALYSIS__SERVER__PORT`)
pub const ENV_PREFIX: &str = "ANALYSIS";

/// Maximum accepted request body in bytes
pub const MAX_BODY_BYTES: u64 = 64 * 1024;
