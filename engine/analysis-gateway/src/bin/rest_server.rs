//! REST API server for trade scores and price projections

use analysis_gateway::config::GatewayConfig;
use analysis_gateway::rest_api;
use analysis_gateway::service::AnalysisService;
use analysis_gateway::DEFAULT_CONFIG_PATH;
use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config_path =
        std::env::var("ANALYSIS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = GatewayConfig::load(&config_path)
        .with_context(|| format!("failed to load configuration from {config_path}"))?;

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting AnalysisGateway v{}...", analysis_gateway::VERSION);

    let service = AnalysisService::from_config(&config).await?;
    info!(
        "Loaded {} players (round {:?})",
        service.registry().player_count(),
        service.registry().current_round()
    );

    let addr = config.server_addr().context("invalid server address")?;
    let routes = rest_api::create_routes(service);

    info!("Listening on {}", addr);
    warp::serve(routes).run(addr).await;

    Ok(())
}
