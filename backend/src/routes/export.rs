//! Data export API routes

use crate::error::ApiError;
use crate::services::ExportService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use healthtrack_shared::types::TrendRequest;
use validator::Validate;

/// Create export routes
pub fn export_routes() -> Router<AppState> {
    Router::new().route("/trend.csv", post(export_trend_csv))
}

/// POST /api/v1/export/trend.csv - Export trend buckets as CSV
async fn export_trend_csv(
    State(state): State<AppState>,
    Json(req): Json<TrendRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()?;
    let csv = ExportService::export_trend_csv(state.statistics(), &req)?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/csv"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=\"trend-export.csv\""),
    );

    Ok((headers, csv))
}
