//! HealthTrack Shared Library
//!
//! Calculation core used by the backend and the WASM module: metabolic
//! estimates, goal recommendation, trend aggregation and the statistics
//! report, plus the request/response types both surfaces speak.

pub mod errors;
pub mod goals;
pub mod metabolic;
pub mod store;
pub mod summary;
pub mod trends;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use goals::{
    recommend_for_profile, recommend_goals, weight_gap_kg, DerivedGoals, GoalHorizon, UserGoals,
    DEFAULT_EXERCISE_GOAL_MINUTES, DEFAULT_HORIZON_WEEKS, KCAL_PER_KG,
};
pub use metabolic::{
    estimate_bmr, estimate_tdee, BiologicalSex, BiometricProfile, DEFAULT_ACTIVITY_MULTIPLIER,
};
pub use store::{period_report, plan_goals, ActivityStore, ProfileStore, StoredProfile};
pub use summary::{build_report, summarize, StatisticsReport, TrendSummary, WeightProgress};
pub use trends::{
    aggregate_trend, average, calorie_goal_met, days_goal_met, exercise_goal_met, trailing_week,
    ActivityKind, ActivityRecord, DateRange, GoalPolicy, Granularity, TrendBucket,
};
pub use types::*;
