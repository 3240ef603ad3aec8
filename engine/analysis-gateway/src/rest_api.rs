//! REST API endpoints for the AnalysisGateway
//!
//! Every response carries `status: "ok"` with the result flattened beside
//! it, or `status: "error"` with a message.

use crate::error::GatewayError;
use crate::service::{AnalysisService, PricePredictionRequest, TrajectoryRequest};
use crate::MAX_BODY_BYTES;
use price_model::PriceTrajectory;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use trade_analyzer::TradeScoreRequest;
use warp::http::StatusCode;
use warp::Filter;

/// Successful response envelope
#[derive(Debug, Serialize)]
pub struct OkResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> OkResponse<T> {
    pub fn new(data: T) -> Self {
        Self { status: "ok", data }
    }
}

/// Error response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { status: "error".to_string(), message: message.into() }
    }
}

/// Trajectory response body
#[derive(Debug, Serialize)]
pub struct TrajectoryResponse {
    pub trajectory: PriceTrajectory,
}

/// Score a trade between two player snapshots
pub async fn trade_score(
    request: TradeScoreRequest,
    service: AnalysisService,
) -> Result<impl warp::Reply, warp::Rejection> {
    match service.trade_score(&request) {
        Ok(result) => {
            tracing::debug!("Trade scored {} ({})", result.trade_score, result.verdict);
            Ok(warp::reply::json(&OkResponse::new(result)))
        }
        Err(e) => Err(warp::reject::custom(e)),
    }
}

/// Forecast a registered player's price
pub async fn price_prediction(
    request: PricePredictionRequest,
    service: AnalysisService,
) -> Result<impl warp::Reply, warp::Rejection> {
    service
        .predict_price(&request)
        .map(|prediction| warp::reply::json(&OkResponse::new(prediction)))
        .map_err(warp::reject::custom)
}

/// Project a supplied snapshot with the magic-multiplier model
pub async fn price_trajectory(
    request: TrajectoryRequest,
    service: AnalysisService,
) -> Result<impl warp::Reply, warp::Rejection> {
    service
        .trajectory(&request)
        .map(|trajectory| warp::reply::json(&OkResponse::new(TrajectoryResponse { trajectory })))
        .map_err(warp::reject::custom)
}

/// Registry record for one player
pub async fn get_player(
    player_id: String,
    service: AnalysisService,
) -> Result<impl warp::Reply, warp::Rejection> {
    service
        .player(&player_id)
        .map(|player| warp::reply::json(&OkResponse::new(player)))
        .map_err(warp::reject::custom)
}

/// Turn rejections into the error envelope
pub async fn handle_rejection(err: warp::Rejection) -> Result<impl warp::Reply, Infallible> {
    let (code, message) = if let Some(e) = err.find::<GatewayError>() {
        if e.status_code().is_server_error() {
            tracing::error!("Request failed: {}", e);
        } else {
            tracing::debug!("Request rejected: {}", e);
        }
        (e.status_code(), e.to_string())
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, format!("Malformed request body: {e}"))
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large".to_string())
    } else if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Route not found".to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
    } else {
        tracing::warn!("Unhandled rejection: {:?}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
    };

    Ok(warp::reply::with_status(warp::reply::json(&ErrorResponse::new(message)), code))
}

/// Create all REST API routes
pub fn create_routes(
    service: AnalysisService,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let service_filter = warp::any().map(move || service.clone());

    // Trade score
    let trade = warp::path("api")
        .and(warp::path("trade-score"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(service_filter.clone())
        .and_then(trade_score);

    // Single-player price prediction
    let predictor = warp::path("api")
        .and(warp::path("price-predictor"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(service_filter.clone())
        .and_then(price_prediction);

    // Direct trajectory
    let trajectory = warp::path("api")
        .and(warp::path("price-trajectory"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(service_filter.clone())
        .and_then(price_trajectory);

    // Player lookup
    let player = warp::path("api")
        .and(warp::path("players"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::get())
        .and(service_filter)
        .and_then(get_player);

    // Health check endpoint
    let health = warp::path("health").and(warp::path::end()).and(warp::get()).map(|| {
        warp::reply::json(&serde_json::json!({
            "status": "healthy",
            "version": crate::VERSION,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    });

    // Combine all routes
    trade
        .or(predictor)
        .or(trajectory)
        .or(player)
        .or(health)
        .recover(handle_rejection)
        .with(
            warp::cors()
                .allow_any_origin()
                .allow_headers(vec!["content-type"])
                .allow_methods(vec!["GET", "POST", "OPTIONS"]),
        )
}
