//! Sufficiency-weighted yield estimation
//!
//! Blends soil NPK sufficiency with the latest rainfall prediction (when
//! one exists) to scale a typical per-crop base yield.

use serde::{Deserialize, Serialize};

use crate::models::nutrients::{targets_for, NutrientReading};
use crate::types::Crop;

const NUTRIENT_WEIGHT: f64 = 0.55;
const RAINFALL_WEIGHT: f64 = 0.45;
/// Rainfall sub-score used when no prediction is available
const NEUTRAL_RAINFALL_SCORE: f64 = 0.6;

/// Disclaimer attached to every estimate
pub const YIELD_ESTIMATE_NOTE: &str = "This is a rough potential yield estimate based on soil \
    NPK sufficiency and the latest predicted rainfall. For actual field planning, always combine \
    this with local expert advice and management practices.";

/// Qualitative yield potential
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum YieldLevel {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for YieldLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YieldLevel::Low => write!(f, "Low"),
            YieldLevel::Moderate => write!(f, "Moderate"),
            YieldLevel::High => write!(f, "High"),
        }
    }
}

/// Estimated yield potential for one crop and soil reading (t/ha)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YieldEstimate {
    pub base_yield: f64,
    pub estimated_yield: f64,
    pub level: YieldLevel,
    /// Mean NPK sufficiency, 0..=1, rounded to 2 decimals
    pub nutrient_score: f64,
    /// Rainfall suitability, 0..=1, rounded to 2 decimals
    pub rainfall_score: f64,
    /// Predicted rainfall that fed the score, when one was available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rainfall_used: Option<f64>,
    /// Ideal seasonal rainfall for this crop (mm)
    pub ideal_rainfall: f64,
    pub note: String,
}

/// Typical attainable yield per crop (t/ha)
fn base_yield_for(crop: Crop) -> f64 {
    match crop {
        Crop::Rice => 5.0,
        Crop::Wheat => 4.5,
        Crop::Maize => 6.0,
        Crop::Other => 3.5,
    }
}

/// Ideal seasonal rainfall per crop (mm)
fn ideal_rainfall_for(crop: Crop) -> f64 {
    match crop {
        Crop::Rice => 140.0,
        Crop::Wheat => 80.0,
        Crop::Maize => 110.0,
        Crop::Other => 100.0,
    }
}

/// Estimate yield potential from raw form values and an optional rainfall
/// prediction.
///
/// Total over its input domain: garbage readings clamp to zero, a
/// non-finite rainfall value is treated as absent, and every sub-score is
/// clamped into [0, 1] before blending.
pub fn build_yield_estimate(
    crop: Crop,
    n: f64,
    p: f64,
    k: f64,
    last_rainfall_mm: Option<f64>,
) -> YieldEstimate {
    let reading = NutrientReading::capture(n, p, k);
    let target = targets_for(crop);
    let base_yield = base_yield_for(crop);
    let ideal_rainfall = ideal_rainfall_for(crop);

    let n_score = (reading.n / target.n).min(1.0);
    let p_score = (reading.p / target.p).min(1.0);
    let k_score = (reading.k / target.k).min(1.0);
    let nutrient_score = (n_score + p_score + k_score) / 3.0;

    let (rainfall_score, rainfall_used) = match last_rainfall_mm {
        Some(rain) if rain.is_finite() => {
            let ratio = 1.0 - (rain - ideal_rainfall).abs() / ideal_rainfall;
            (ratio.clamp(0.0, 1.0), Some(rain))
        }
        _ => (NEUTRAL_RAINFALL_SCORE, None),
    };

    let overall_score = NUTRIENT_WEIGHT * nutrient_score + RAINFALL_WEIGHT * rainfall_score;
    let multiplier = 0.7 + 0.6 * overall_score;
    let estimated_yield = round2(base_yield * multiplier);
    let level = classify_yield_level(overall_score);

    YieldEstimate {
        base_yield,
        estimated_yield,
        level,
        nutrient_score: round2(nutrient_score),
        rainfall_score: round2(rainfall_score),
        rainfall_used,
        ideal_rainfall,
        note: YIELD_ESTIMATE_NOTE.to_string(),
    }
}

/// Map a blended 0..=1 score to a qualitative level.
///
/// The boundary values 0.4 and 0.7 both classify as Moderate.
pub fn classify_yield_level(overall_score: f64) -> YieldLevel {
    if overall_score < 0.4 {
        YieldLevel::Low
    } else if overall_score > 0.7 {
        YieldLevel::High
    } else {
        YieldLevel::Moderate
    }
}

/// Round to two decimal places, half away from zero
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_rainfall_when_no_prediction() {
        let estimate = build_yield_estimate(Crop::Rice, 50.0, 25.0, 25.0, None);
        assert_eq!(estimate.rainfall_score, NEUTRAL_RAINFALL_SCORE);
        assert_eq!(estimate.rainfall_used, None);
    }

    #[test]
    fn test_ideal_rainfall_gives_full_score() {
        let estimate = build_yield_estimate(Crop::Rice, 100.0, 50.0, 50.0, Some(140.0));
        assert_eq!(estimate.nutrient_score, 1.0);
        assert_eq!(estimate.rainfall_score, 1.0);
        // overall 1.0 -> multiplier 1.3 -> 5.0 * 1.3
        assert_eq!(estimate.estimated_yield, 6.5);
        assert_eq!(estimate.level, YieldLevel::High);
    }

    #[test]
    fn test_depleted_soil_is_low() {
        let estimate = build_yield_estimate(Crop::Maize, 0.0, 0.0, 0.0, Some(0.0));
        assert_eq!(estimate.nutrient_score, 0.0);
        assert_eq!(estimate.rainfall_score, 0.0);
        assert_eq!(estimate.level, YieldLevel::Low);
        // overall 0 -> multiplier 0.7
        assert_eq!(estimate.estimated_yield, 4.2);
    }

    #[test]
    fn test_non_finite_rainfall_treated_as_absent() {
        let estimate = build_yield_estimate(Crop::Wheat, 45.0, 20.0, 20.0, Some(f64::NAN));
        assert_eq!(estimate.rainfall_score, NEUTRAL_RAINFALL_SCORE);
        assert_eq!(estimate.rainfall_used, None);
    }

    #[test]
    fn test_base_and_ideal_tables() {
        let estimate = build_yield_estimate(Crop::Other, 0.0, 0.0, 0.0, None);
        assert_eq!(estimate.base_yield, 3.5);
        assert_eq!(estimate.ideal_rainfall, 100.0);
    }
}
