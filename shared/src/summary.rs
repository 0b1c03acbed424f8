//! Statistics summaries
//!
//! Combines diet and exercise trends with the user's stored goals into the
//! figures the statistics screen displays: per-period totals, the average,
//! how many periods met the goal, and the remaining weight gap.

use crate::errors::CalcResult;
use crate::goals::{weight_gap_kg, UserGoals};
use crate::metabolic::BiometricProfile;
use crate::trends::{
    aggregate_trend, average, days_goal_met, ActivityRecord, GoalPolicy, Granularity,
    TrendBucket,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Trend of one activity kind measured against its goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub buckets: Vec<TrendBucket>,
    pub total: f64,
    pub average: f64,
    pub goal: f64,
    pub policy: GoalPolicy,
    /// Periods satisfying `policy` against `goal`
    pub days_goal_met: usize,
    pub period_count: usize,
}

/// Current weight against the weight goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightProgress {
    pub current_weight_kg: f64,
    pub weight_goal_kg: f64,
    /// Positive while there is weight left to lose
    pub gap_kg: f64,
}

/// Everything shown for one statistics window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub granularity: Granularity,
    pub diet: TrendSummary,
    pub exercise: TrendSummary,
    pub weight: WeightProgress,
}

/// Summarize buckets against a goal
pub fn summarize(buckets: Vec<TrendBucket>, goal: f64, policy: GoalPolicy) -> TrendSummary {
    let total = buckets.iter().fold(0.0, |acc, b| acc + b.total);
    let met = days_goal_met(&buckets, goal, |t, g| policy.is_met(t, g));
    TrendSummary {
        average: average(&buckets),
        period_count: buckets.len(),
        days_goal_met: met,
        buckets,
        total,
        goal,
        policy,
    }
}

/// Build the diet, exercise and weight report for a window
///
/// Diet totals are judged with [`GoalPolicy::CalorieCeiling`] against the
/// daily calorie goal, exercise totals with [`GoalPolicy::ExerciseFloor`]
/// against the daily exercise goal.
pub fn build_report(
    profile: &BiometricProfile,
    goals: &UserGoals,
    diet_records: &[ActivityRecord],
    exercise_records: &[ActivityRecord],
    window_start: NaiveDate,
    window_end: NaiveDate,
    granularity: Granularity,
) -> CalcResult<StatisticsReport> {
    let diet_buckets = aggregate_trend(diet_records, window_start, window_end, granularity)?;
    let exercise_buckets =
        aggregate_trend(exercise_records, window_start, window_end, granularity)?;

    Ok(StatisticsReport {
        window_start,
        window_end,
        granularity,
        diet: summarize(
            diet_buckets,
            f64::from(goals.daily_calorie_goal),
            GoalPolicy::CalorieCeiling,
        ),
        exercise: summarize(
            exercise_buckets,
            f64::from(goals.daily_exercise_goal_minutes),
            GoalPolicy::ExerciseFloor,
        ),
        weight: WeightProgress {
            current_weight_kg: profile.weight_kg,
            weight_goal_kg: goals.weight_goal_kg,
            gap_kg: weight_gap_kg(profile.weight_kg, goals.weight_goal_kg),
        },
    })
}
