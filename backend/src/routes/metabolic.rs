//! Metabolic estimate API routes

use crate::error::ApiError;
use crate::services::GoalsService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use healthtrack_shared::types::{EstimateRequest, EstimateResponse};

/// Create metabolic routes
pub fn metabolic_routes() -> Router<AppState> {
    Router::new().route("/estimate", post(estimate))
}

/// POST /api/v1/metabolic/estimate - BMR and TDEE for a profile
async fn estimate(
    State(state): State<AppState>,
    Json(req): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>, ApiError> {
    let response = GoalsService::estimate(state.statistics(), &req)?;
    Ok(Json(response))
}
