//! Soil nutrient readings and per-crop target levels

use serde::{Deserialize, Serialize};

use crate::types::Crop;

/// Current soil macronutrient measurement (kg/acre equivalents)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutrientReading {
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "P")]
    pub p: f64,
    #[serde(rename = "K")]
    pub k: f64,
}

impl NutrientReading {
    /// Capture a reading from raw form values.
    ///
    /// Non-finite or negative values are treated as zero; the derivation
    /// engine never rejects input.
    pub fn capture(n: f64, p: f64, k: f64) -> Self {
        Self {
            n: sanitize(n),
            p: sanitize(p),
            k: sanitize(k),
        }
    }
}

/// Target soil nutrient levels for a crop (kg/acre equivalents)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutrientTarget {
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "P")]
    pub p: f64,
    #[serde(rename = "K")]
    pub k: f64,
}

/// Look up the target NPK levels for a crop.
///
/// Unrecognized crops use the generic default row, so a target is always
/// available.
pub fn targets_for(crop: Crop) -> NutrientTarget {
    match crop {
        Crop::Rice => NutrientTarget {
            n: 100.0,
            p: 50.0,
            k: 50.0,
        },
        Crop::Wheat => NutrientTarget {
            n: 90.0,
            p: 40.0,
            k: 40.0,
        },
        Crop::Maize => NutrientTarget {
            n: 120.0,
            p: 60.0,
            k: 40.0,
        },
        Crop::Other => NutrientTarget {
            n: 80.0,
            p: 40.0,
            k: 40.0,
        },
    }
}

/// Coerce a raw form value into the non-negative numeric domain
pub(crate) fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
