//! Profile and activity store collaborators
//!
//! The calculations never reach out for data themselves. Callers pass the
//! stores in explicitly; the two flows here load what a calculation needs,
//! run it, and write recommended goals back to the profile.

use crate::errors::{InvalidInputError, PlanError, StoreError};
use crate::goals::{recommend_for_profile, GoalHorizon, UserGoals};
use crate::metabolic::BiometricProfile;
use crate::summary::{build_report, StatisticsReport};
use crate::trends::{ActivityKind, ActivityRecord, DateRange, Granularity};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Profile document as held by the profile store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    pub biometrics: BiometricProfile,
    /// Absent until the user saves goals for the first time
    #[serde(default)]
    pub goals: Option<UserGoals>,
}

impl StoredProfile {
    /// Saved goals, or the defaults for a user without any
    pub fn goals_or_default(&self) -> UserGoals {
        self.goals.unwrap_or_default()
    }
}

/// Read and update user profiles
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn load_profile(&self, user_id: &str) -> Result<StoredProfile, StoreError>;

    async fn save_goals(&self, user_id: &str, goals: &UserGoals) -> Result<(), StoreError>;
}

/// Read diet and exercise records
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Records of `kind` for the user, limited to `range` when given
    async fn load_records(
        &self,
        user_id: &str,
        kind: ActivityKind,
        range: Option<DateRange>,
    ) -> Result<Vec<ActivityRecord>, StoreError>;
}

/// Recommend goals for a user and persist them on the profile
pub async fn plan_goals<P>(
    profiles: &P,
    user_id: &str,
    horizon: GoalHorizon,
    activity_multiplier: f64,
) -> Result<UserGoals, PlanError>
where
    P: ProfileStore + ?Sized,
{
    let profile = profiles.load_profile(user_id).await?;
    let derived = recommend_for_profile(&profile.biometrics, &horizon, activity_multiplier)?;
    let goals = UserGoals::from_recommendation(derived, horizon.target_weight_kg);
    profiles.save_goals(user_id, &goals).await?;
    Ok(goals)
}

/// Load a user's profile and records and build the statistics report
pub async fn period_report<P, A>(
    profiles: &P,
    activities: &A,
    user_id: &str,
    window: DateRange,
    granularity: Granularity,
) -> Result<StatisticsReport, PlanError>
where
    P: ProfileStore + ?Sized,
    A: ActivityStore + ?Sized,
{
    // Reject an inverted window before touching the stores
    if window.start > window.end {
        return Err(
            InvalidInputError::new("window_start", "must not be after window_end").into(),
        );
    }

    let profile = profiles.load_profile(user_id).await?;
    let diet = activities
        .load_records(user_id, ActivityKind::Diet, Some(window))
        .await?;
    let exercise = activities
        .load_records(user_id, ActivityKind::Exercise, Some(window))
        .await?;

    let report = build_report(
        &profile.biometrics,
        &profile.goals_or_default(),
        &diet,
        &exercise,
        window.start,
        window.end,
        granularity,
    )?;
    Ok(report)
}
