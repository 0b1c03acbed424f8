//! HealthTrack WASM Module
//!
//! WebAssembly bindings for the calculations the statistics screen runs
//! in the browser. Structured inputs and outputs cross the boundary as JSON.

use chrono::NaiveDate;
use healthtrack_shared::{
    aggregate_trend as shared_aggregate, estimate_bmr as shared_bmr, estimate_tdee as shared_tdee,
    recommend_goals as shared_recommend, ActivityRecord, BiologicalSex, Granularity,
};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

fn sex_from_flag(is_male: bool) -> BiologicalSex {
    if is_male {
        BiologicalSex::Male
    } else {
        BiologicalSex::Female
    }
}

/// Calculate BMR (Mifflin-St Jeor) from weight (kg), height (cm) and age
#[wasm_bindgen]
pub fn estimate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    is_male: bool,
) -> Result<f64, JsValue> {
    bmr_inner(weight_kg, height_cm, age_years, is_male).map_err(|e| JsValue::from_str(&e))
}

/// Calculate TDEE (Total Daily Energy Expenditure) from a BMR
#[wasm_bindgen]
pub fn estimate_tdee(bmr: f64, activity_multiplier: f64) -> Result<f64, JsValue> {
    shared_tdee(bmr, activity_multiplier).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Recommend daily goals; returns `{"daily_calorie_goal", "daily_exercise_goal_minutes"}` JSON
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn recommend_goals(
    current_weight_kg: f64,
    target_weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    is_male: bool,
    activity_multiplier: f64,
    weeks: i32,
) -> Result<String, JsValue> {
    recommend_inner(
        current_weight_kg,
        target_weight_kg,
        height_cm,
        age_years,
        is_male,
        activity_multiplier,
        weeks,
    )
    .map_err(|e| JsValue::from_str(&e))
}

/// Bucket records into periods
///
/// Input: `{"records": [...], "window_start", "window_end", "granularity"}`.
/// Output: JSON array of `{"period_label", "period_start", "total"}`.
#[wasm_bindgen]
pub fn aggregate_trend(request_json: &str) -> Result<String, JsValue> {
    trend_inner(request_json).map_err(|e| JsValue::from_str(&e))
}

#[derive(Deserialize)]
struct TrendInput {
    records: Vec<ActivityRecord>,
    window_start: NaiveDate,
    window_end: NaiveDate,
    #[serde(default)]
    granularity: Granularity,
}

fn bmr_inner(weight_kg: f64, height_cm: f64, age_years: i32, is_male: bool) -> Result<f64, String> {
    shared_bmr(weight_kg, height_cm, age_years, sex_from_flag(is_male)).map_err(|e| e.to_string())
}

#[allow(clippy::too_many_arguments)]
fn recommend_inner(
    current_weight_kg: f64,
    target_weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    is_male: bool,
    activity_multiplier: f64,
    weeks: i32,
) -> Result<String, String> {
    let goals = shared_recommend(
        current_weight_kg,
        target_weight_kg,
        height_cm,
        age_years,
        sex_from_flag(is_male),
        activity_multiplier,
        weeks,
    )
    .map_err(|e| e.to_string())?;
    serde_json::to_string(&goals).map_err(|e| e.to_string())
}

fn trend_inner(request_json: &str) -> Result<String, String> {
    let input: TrendInput = serde_json::from_str(request_json).map_err(|e| e.to_string())?;
    let buckets = shared_aggregate(
        &input.records,
        input.window_start,
        input.window_end,
        input.granularity,
    )
    .map_err(|e| e.to_string())?;
    serde_json::to_string(&buckets).map_err(|e| e.to_string())
}
