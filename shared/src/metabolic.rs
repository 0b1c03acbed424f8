//! Metabolic estimation
//!
//! Basal metabolic rate via Mifflin-St Jeor and total daily energy
//! expenditure as BMR scaled by an activity multiplier. All functions are
//! pure and validate their inputs before computing.

use crate::errors::CalcResult;
use crate::validation::{ensure_positive, validate_age_years};
use serde::{Deserialize, Serialize};

/// Activity multiplier used when the caller does not supply one
pub const DEFAULT_ACTIVITY_MULTIPLIER: f64 = 1.4;

/// Biological sex for physiological calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl BiologicalSex {
    /// Constant term of the Mifflin-St Jeor equation
    fn mifflin_offset(&self) -> f64 {
        match self {
            BiologicalSex::Male => 5.0,
            BiologicalSex::Female => -161.0,
        }
    }
}

/// Body metrics stored on the user record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiometricProfile {
    /// Current weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: i32,
    pub sex: BiologicalSex,
}

impl BiometricProfile {
    /// BMR for this profile
    pub fn bmr(&self) -> CalcResult<f64> {
        estimate_bmr(self.weight_kg, self.height_cm, self.age_years, self.sex)
    }
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn estimate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: BiologicalSex,
) -> CalcResult<f64> {
    ensure_positive("weight_kg", weight_kg)?;
    ensure_positive("height_cm", height_cm)?;
    validate_age_years(age_years)?;

    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    Ok(base + sex.mifflin_offset())
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn estimate_tdee(bmr: f64, activity_multiplier: f64) -> CalcResult<f64> {
    ensure_positive("activity_multiplier", activity_multiplier)?;
    Ok(bmr * activity_multiplier)
}
