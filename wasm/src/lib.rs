//! WebAssembly module for Agro Advisor
//!
//! Provides client-side computation for:
//! - Fertilizer planning
//! - Yield estimation
//! - Crop calendar projection
//! - Rainfall classification and guidance

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization: {}", e)))
}

/// Build a fertilizer plan for the given crop and soil readings
#[wasm_bindgen]
pub fn fertilizer_plan_json(crop: &str, n: f64, p: f64, k: f64) -> Result<String, JsValue> {
    let plan = build_fertilizer_plan(Crop::resolve(Some(crop)), n, p, k);
    to_json(&plan)
}

/// Estimate the yield potential; pass `undefined` rainfall when no
/// prediction is available yet
#[wasm_bindgen]
pub fn yield_estimate_json(
    crop: &str,
    n: f64,
    p: f64,
    k: f64,
    last_rainfall_mm: Option<f64>,
) -> Result<String, JsValue> {
    let estimate = build_yield_estimate(Crop::resolve(Some(crop)), n, p, k, last_rainfall_mm);
    to_json(&estimate)
}

/// Full crop calendar (title plus phase list)
#[wasm_bindgen]
pub fn crop_calendar_json(crop: &str) -> Result<String, JsValue> {
    let calendar = calendar_for(Crop::resolve(Some(crop)));
    to_json(&calendar)
}

/// Project one 28-day calendar block onto the month grid
#[wasm_bindgen]
pub fn calendar_grid_json(
    crop: &str,
    start_month: u32,
    block_offset: i32,
) -> Result<String, JsValue> {
    let calendar = calendar_for(Crop::resolve(Some(crop)));
    let grid = project_grid(&calendar, start_month, block_offset);
    to_json(&grid)
}

/// Cultivation tips for the given crop
#[wasm_bindgen]
pub fn crop_tips_json(crop: &str) -> Result<String, JsValue> {
    to_json(&tips_for(Crop::resolve(Some(crop))))
}

/// Human-readable rainfall level label
#[wasm_bindgen]
pub fn classify_rainfall_level(rainfall_mm: f64) -> String {
    classify_rainfall(Some(rainfall_mm)).to_string()
}

/// Rainfall level plus its field advice and 7-day task list
#[wasm_bindgen]
pub fn rainfall_guidance_json(rainfall_mm: f64) -> Result<String, JsValue> {
    let level = classify_rainfall(Some(rainfall_mm));
    to_json(&serde_json::json!({
        "level": level,
        "label": level.to_string(),
        "field_advice": level.field_advice(),
        "next_seven_day_tasks": level.next_seven_day_tasks(),
    }))
}

/// Seasonal profile for a calendar month (1-12)
#[wasm_bindgen]
pub fn month_profile_json(month: u32) -> Result<String, JsValue> {
    to_json(&month_profile(month))
}

/// Quick rainfall estimate from the three lag observations
#[wasm_bindgen]
pub fn rainfall_from_lags(lag1: f64, lag2: f64, lag3: f64) -> f64 {
    estimate_rainfall_from_lags(lag1, lag2, lag3)
}
