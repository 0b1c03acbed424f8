//! Goals service for metabolic estimates and goal recommendation
//!
//! Fills request gaps from configuration and hands the numbers to the
//! shared calculation core.

use crate::config::StatisticsConfig;
use crate::error::ApiError;
use healthtrack_shared::types::{
    EstimateRequest, EstimateResponse, RecommendGoalsRequest, RecommendGoalsResponse,
};
use healthtrack_shared::{
    estimate_tdee, recommend_for_profile, GoalHorizon, UserGoals, KCAL_PER_KG,
};
use tracing::{debug, instrument};

/// Goals service
pub struct GoalsService;

impl GoalsService {
    /// Estimate BMR and TDEE for a profile
    #[instrument(skip_all, fields(sex = ?req.profile.sex))]
    pub fn estimate(
        settings: &StatisticsConfig,
        req: &EstimateRequest,
    ) -> Result<EstimateResponse, ApiError> {
        let multiplier = req
            .activity_multiplier
            .unwrap_or(settings.activity_multiplier);

        let bmr = req.profile.bmr()?;
        let tdee = estimate_tdee(bmr, multiplier)?;
        debug!(bmr, tdee, multiplier, "Estimated energy expenditure");

        Ok(EstimateResponse {
            bmr,
            tdee,
            activity_multiplier: multiplier,
            unit: "kcal".to_string(),
        })
    }

    /// Recommend daily goals for reaching a target weight
    #[instrument(skip_all, fields(weeks = ?req.weeks))]
    pub fn recommend(
        settings: &StatisticsConfig,
        req: &RecommendGoalsRequest,
    ) -> Result<RecommendGoalsResponse, ApiError> {
        let multiplier = req
            .activity_multiplier
            .unwrap_or(settings.activity_multiplier);
        let weeks = req.weeks.unwrap_or(settings.default_horizon_weeks);
        let horizon = GoalHorizon {
            target_weight_kg: req.target_weight_kg,
            weeks,
        };

        let goals = recommend_for_profile(&req.profile, &horizon, multiplier)?;
        let bmr = req.profile.bmr()?;
        let tdee = estimate_tdee(bmr, multiplier)?;

        let change_kg = req.target_weight_kg - req.profile.weight_kg;
        debug!(
            change_kg,
            energy_kcal = change_kg * KCAL_PER_KG,
            daily_calorie_goal = goals.daily_calorie_goal,
            "Recommended goals"
        );

        Ok(RecommendGoalsResponse {
            goals,
            user_goals: UserGoals::from_recommendation(goals, req.target_weight_kg),
            bmr,
            tdee,
            weeks,
            activity_multiplier: multiplier,
        })
    }
}
