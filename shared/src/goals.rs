//! Goal recommendation
//!
//! Converts a desired body-weight change over a number of weeks into a daily
//! calorie target, using the energy density of body mass. The exercise
//! target is a fixed 30 minutes a day regardless of input.

use crate::errors::CalcResult;
use crate::metabolic::{estimate_bmr, estimate_tdee, BiologicalSex, BiometricProfile};
use crate::validation::{ensure_finite, validate_weeks};
use serde::{Deserialize, Serialize};

/// Approximate energy content of one kilogram of body mass (kcal)
pub const KCAL_PER_KG: f64 = 7700.0;

/// Daily exercise goal handed out by the recommender (minutes)
pub const DEFAULT_EXERCISE_GOAL_MINUTES: i32 = 30;

/// Horizon used when the caller does not choose one
pub const DEFAULT_HORIZON_WEEKS: i32 = 4;

/// Target weight and the time allowed to reach it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalHorizon {
    pub target_weight_kg: f64,
    pub weeks: i32,
}

/// Recommended daily targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedGoals {
    /// Daily energy intake target (kcal)
    pub daily_calorie_goal: i32,
    /// Daily exercise target (minutes)
    pub daily_exercise_goal_minutes: i32,
}

/// Goals persisted on the user record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserGoals {
    pub daily_calorie_goal: i32,
    pub daily_exercise_goal_minutes: i32,
    pub weight_goal_kg: f64,
}

impl Default for UserGoals {
    /// Goals assumed for a user who has never saved any
    fn default() -> Self {
        Self {
            daily_calorie_goal: 2000,
            daily_exercise_goal_minutes: 45,
            weight_goal_kg: 60.0,
        }
    }
}

impl UserGoals {
    /// Record to persist after accepting a recommendation
    pub fn from_recommendation(derived: DerivedGoals, weight_goal_kg: f64) -> Self {
        Self {
            daily_calorie_goal: derived.daily_calorie_goal,
            daily_exercise_goal_minutes: derived.daily_exercise_goal_minutes,
            weight_goal_kg,
        }
    }
}

/// Recommend daily calorie and exercise goals
///
/// daily_calorie_goal = round(TDEE + (target - current) × 7700 / (weeks × 7))
///
/// A negative weight change (loss) yields a goal below TDEE.
#[allow(clippy::too_many_arguments)]
pub fn recommend_goals(
    current_weight_kg: f64,
    target_weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: BiologicalSex,
    activity_multiplier: f64,
    weeks: i32,
) -> CalcResult<DerivedGoals> {
    validate_weeks(weeks)?;
    ensure_finite("target_weight_kg", target_weight_kg)?;

    let bmr = estimate_bmr(current_weight_kg, height_cm, age_years, sex)?;
    let tdee = estimate_tdee(bmr, activity_multiplier)?;

    let total_change_kg = target_weight_kg - current_weight_kg;
    let days = f64::from(weeks) * 7.0;
    let daily_calorie_change = total_change_kg * KCAL_PER_KG / days;

    Ok(DerivedGoals {
        daily_calorie_goal: round_half_up(tdee + daily_calorie_change),
        daily_exercise_goal_minutes: DEFAULT_EXERCISE_GOAL_MINUTES,
    })
}

/// Recommend goals for a stored profile and horizon
pub fn recommend_for_profile(
    profile: &BiometricProfile,
    horizon: &GoalHorizon,
    activity_multiplier: f64,
) -> CalcResult<DerivedGoals> {
    recommend_goals(
        profile.weight_kg,
        horizon.target_weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.sex,
        activity_multiplier,
        horizon.weeks,
    )
}

/// Remaining weight to lose (positive) or gain (negative)
pub fn weight_gap_kg(current_weight_kg: f64, weight_goal_kg: f64) -> f64 {
    current_weight_kg - weight_goal_kg
}

/// Round to nearest integer, halves towards positive infinity
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metabolic::DEFAULT_ACTIVITY_MULTIPLIER;
    use proptest::prelude::*;

    #[test]
    fn test_end_to_end_recommendation() {
        // BMR 1592.5, TDEE 2229.5, -5kg over 28 days = -1375 kcal/day
        let goals = recommend_goals(
            65.0,
            60.0,
            170.0,
            25,
            BiologicalSex::Male,
            DEFAULT_ACTIVITY_MULTIPLIER,
            4,
        )
        .unwrap();
        assert_eq!(goals.daily_calorie_goal, 855);
        assert_eq!(goals.daily_exercise_goal_minutes, 30);
    }

    #[test]
    fn test_maintenance_equals_tdee() {
        // BMR 1617.5 -> TDEE 2264.5 -> rounds up to 2265
        let goals =
            recommend_goals(70.0, 70.0, 170.0, 30, BiologicalSex::Male, 1.4, 4).unwrap();
        assert_eq!(goals.daily_calorie_goal, 2265);
        assert_eq!(goals.daily_exercise_goal_minutes, 30);
    }

    #[test]
    fn test_weight_loss_goal_below_tdee() {
        let goals =
            recommend_goals(80.0, 70.0, 175.0, 30, BiologicalSex::Male, 1.4, 4).unwrap();
        let tdee = estimate_tdee(
            estimate_bmr(80.0, 175.0, 30, BiologicalSex::Male).unwrap(),
            1.4,
        )
        .unwrap();
        assert!(f64::from(goals.daily_calorie_goal) < tdee);
        // 2448.25 - 2750 = -301.75, which rounds like Math.round
        assert_eq!(goals.daily_calorie_goal, -302);
    }

    #[test]
    fn test_weight_gain_goal_above_tdee() {
        let goals =
            recommend_goals(60.0, 64.0, 165.0, 28, BiologicalSex::Female, 1.4, 8).unwrap();
        let tdee = estimate_tdee(
            estimate_bmr(60.0, 165.0, 28, BiologicalSex::Female).unwrap(),
            1.4,
        )
        .unwrap();
        assert!(f64::from(goals.daily_calorie_goal) > tdee);
    }

    #[test]
    fn test_non_positive_weeks_rejected() {
        for weeks in [0, -1, -52] {
            let err = recommend_goals(70.0, 65.0, 170.0, 30, BiologicalSex::Male, 1.4, weeks)
                .unwrap_err();
            assert_eq!(err.field, "weeks");
        }
    }

    #[test]
    fn test_very_long_horizon_approaches_tdee() {
        // weeks * 7 no longer fits an i32
        let goals = recommend_goals(
            70.0,
            65.0,
            170.0,
            30,
            BiologicalSex::Male,
            1.4,
            400_000_000,
        )
        .unwrap();
        let goals_max =
            recommend_goals(70.0, 65.0, 170.0, 30, BiologicalSex::Male, 1.4, i32::MAX).unwrap();
        // BMR 1617.5, TDEE 2264.5, the loss spread thin rounds the half up
        assert_eq!(goals.daily_calorie_goal, 2264);
        assert_eq!(goals_max.daily_calorie_goal, 2264);
    }

    #[test]
    fn test_invalid_profile_propagates() {
        let err =
            recommend_goals(70.0, 65.0, 0.0, 30, BiologicalSex::Male, 1.4, 4).unwrap_err();
        assert_eq!(err.field, "height_cm");

        let err =
            recommend_goals(70.0, 65.0, 170.0, 30, BiologicalSex::Male, 0.0, 4).unwrap_err();
        assert_eq!(err.field, "activity_multiplier");

        let err = recommend_goals(70.0, f64::NAN, 170.0, 30, BiologicalSex::Male, 1.4, 4)
            .unwrap_err();
        assert_eq!(err.field, "target_weight_kg");
    }

    #[test]
    fn test_recommend_for_profile() {
        let profile = BiometricProfile {
            weight_kg: 65.0,
            height_cm: 170.0,
            age_years: 25,
            sex: BiologicalSex::Male,
        };
        let horizon = GoalHorizon {
            target_weight_kg: 60.0,
            weeks: DEFAULT_HORIZON_WEEKS,
        };
        let goals = recommend_for_profile(&profile, &horizon, 1.4).unwrap();
        assert_eq!(goals.daily_calorie_goal, 855);
    }

    #[test]
    fn test_user_goals_from_recommendation() {
        let derived = DerivedGoals {
            daily_calorie_goal: 1800,
            daily_exercise_goal_minutes: 30,
        };
        let goals = UserGoals::from_recommendation(derived, 62.5);
        assert_eq!(goals.daily_calorie_goal, 1800);
        assert_eq!(goals.daily_exercise_goal_minutes, 30);
        assert_eq!(goals.weight_goal_kg, 62.5);
    }

    #[test]
    fn test_default_user_goals() {
        let goals = UserGoals::default();
        assert_eq!(goals.daily_calorie_goal, 2000);
        assert_eq!(goals.daily_exercise_goal_minutes, 45);
        assert_eq!(goals.weight_goal_kg, 60.0);
    }

    #[test]
    fn test_weight_gap() {
        assert_eq!(weight_gap_kg(65.0, 60.0), 5.0);
        assert_eq!(weight_gap_kg(55.0, 60.0), -5.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(854.5), 855);
        assert_eq!(round_half_up(853.1), 853);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-1.5), -1);
        assert_eq!(round_half_up(-301.75), -302);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: the exercise goal never depends on the inputs
        #[test]
        fn prop_exercise_goal_constant(
            current in 40.0f64..150.0,
            target in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18i32..80,
            weeks in 1i32..52
        ) {
            let goals = recommend_goals(current, target, height, age, BiologicalSex::Female, 1.4, weeks).unwrap();
            prop_assert_eq!(goals.daily_exercise_goal_minutes, DEFAULT_EXERCISE_GOAL_MINUTES);
        }

        /// Property: losing weight always yields a goal below TDEE
        #[test]
        fn prop_loss_below_tdee(
            current in 60.0f64..150.0,
            loss in 1.0f64..20.0,
            height in 140.0f64..210.0,
            age in 18i32..80,
            weeks in 1i32..52
        ) {
            let sex = BiologicalSex::Male;
            let goals = recommend_goals(current, current - loss, height, age, sex, 1.4, weeks).unwrap();
            let tdee = estimate_tdee(estimate_bmr(current, height, age, sex).unwrap(), 1.4).unwrap();
            prop_assert!(f64::from(goals.daily_calorie_goal) < tdee);
        }
    }
}
