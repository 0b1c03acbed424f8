//! Goals API routes

use crate::error::ApiError;
use crate::services::GoalsService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use healthtrack_shared::types::{RecommendGoalsRequest, RecommendGoalsResponse};
use validator::Validate;

/// Create goals routes
pub fn goals_routes() -> Router<AppState> {
    Router::new().route("/recommend", post(recommend_goals))
}

/// POST /api/v1/goals/recommend - Daily goals for reaching a target weight
///
/// The response carries the `user_goals` record for the client to persist.
async fn recommend_goals(
    State(state): State<AppState>,
    Json(req): Json<RecommendGoalsRequest>,
) -> Result<Json<RecommendGoalsResponse>, ApiError> {
    req.validate()?;
    let response = GoalsService::recommend(state.statistics(), &req)?;
    Ok(Json(response))
}
