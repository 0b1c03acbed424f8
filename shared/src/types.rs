//! API request and response types

use crate::goals::{DerivedGoals, UserGoals};
use crate::metabolic::BiometricProfile;
use crate::trends::{ActivityKind, ActivityRecord, GoalPolicy, Granularity, TrendBucket};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Metabolic Estimation Types
// ============================================================================

/// BMR/TDEE estimate request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    #[serde(flatten)]
    pub profile: BiometricProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_multiplier: Option<f64>,
}

/// BMR/TDEE estimate response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateResponse {
    pub bmr: f64,
    pub tdee: f64,
    pub activity_multiplier: f64,
    pub unit: String,
}

// ============================================================================
// Goal Recommendation Types
// ============================================================================

/// Goal recommendation request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendGoalsRequest {
    pub profile: BiometricProfile,
    pub target_weight_kg: f64,
    /// Horizon in weeks (server default when omitted)
    #[serde(default)]
    #[validate(range(max = 520))]
    pub weeks: Option<i32>,
    #[serde(default)]
    pub activity_multiplier: Option<f64>,
}

/// Goal recommendation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendGoalsResponse {
    pub goals: DerivedGoals,
    /// Record the client persists on the user profile
    pub user_goals: UserGoals,
    pub bmr: f64,
    pub tdee: f64,
    pub weeks: i32,
    pub activity_multiplier: f64,
}

// ============================================================================
// Trend Types
// ============================================================================

/// Trend aggregation request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TrendRequest {
    #[validate(length(max = 10000))]
    pub records: Vec<ActivityRecord>,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    #[serde(default)]
    pub granularity: Granularity,
    /// Kind of the records; selects the goal policy
    #[serde(default)]
    pub kind: Option<ActivityKind>,
    /// Goal to count met periods against (requires `kind`)
    #[serde(default)]
    pub goal: Option<f64>,
}

/// Trend aggregation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendResponse {
    pub buckets: Vec<TrendBucket>,
    pub total: f64,
    pub average: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<GoalPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_goal_met: Option<usize>,
}

// ============================================================================
// Statistics Report Types
// ============================================================================

/// Diet/exercise statistics report request
///
/// Without a window the report covers the seven days ending today (UTC).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReportRequest {
    pub profile: BiometricProfile,
    /// Stored goals; defaults apply when omitted
    #[serde(default)]
    pub goals: Option<UserGoals>,
    #[serde(default)]
    #[validate(length(max = 10000))]
    pub diet_records: Vec<ActivityRecord>,
    #[serde(default)]
    #[validate(length(max = 10000))]
    pub exercise_records: Vec<ActivityRecord>,
    #[serde(default)]
    pub window_start: Option<NaiveDate>,
    #[serde(default)]
    pub window_end: Option<NaiveDate>,
    #[serde(default)]
    pub granularity: Granularity,
}

/// Row of a trend CSV export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendCsvRow {
    pub period_label: String,
    pub period_start: NaiveDate,
    pub total: f64,
}

impl From<&TrendBucket> for TrendCsvRow {
    fn from(bucket: &TrendBucket) -> Self {
        Self {
            period_label: bucket.period_label.clone(),
            period_start: bucket.period_start,
            total: bucket.total,
        }
    }
}
