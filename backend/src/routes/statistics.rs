//! Statistics API routes

use crate::error::ApiError;
use crate::services::StatisticsService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use healthtrack_shared::types::{ReportRequest, TrendRequest, TrendResponse};
use healthtrack_shared::StatisticsReport;
use validator::Validate;

/// Create statistics routes
pub fn statistics_routes() -> Router<AppState> {
    Router::new()
        .route("/trend", post(trend))
        .route("/report", post(report))
}

/// POST /api/v1/statistics/trend - Bucket records for a chart
async fn trend(
    State(state): State<AppState>,
    Json(req): Json<TrendRequest>,
) -> Result<Json<TrendResponse>, ApiError> {
    req.validate()?;
    let response = StatisticsService::trend(state.statistics(), &req)?;
    Ok(Json(response))
}

/// POST /api/v1/statistics/report - Diet, exercise and weight for a window
///
/// Without a window the report covers the seven days ending today (UTC).
async fn report(
    State(state): State<AppState>,
    Json(req): Json<ReportRequest>,
) -> Result<Json<StatisticsReport>, ApiError> {
    req.validate()?;
    let today = Utc::now().date_naive();
    let response = StatisticsService::report(state.statistics(), &req, today)?;
    Ok(Json(response))
}
