//! Rule-based fertilizer planning
//!
//! Converts the gap between current soil NPK and the crop target into
//! per-acre quantities of common commercial products.

use serde::{Deserialize, Serialize};

use crate::models::nutrients::{targets_for, NutrientReading, NutrientTarget};
use crate::types::Crop;

/// Nitrogen content of urea by mass
const UREA_N_FRACTION: f64 = 0.46;
/// P2O5 content of DAP by mass
const DAP_P_FRACTION: f64 = 0.46;
/// K2O content of MOP by mass
const MOP_K_FRACTION: f64 = 0.60;

/// Disclaimer attached to every plan
pub const FERTILIZER_PLAN_NOTE: &str = "These are approximate per-acre quantities based on a \
    generic recommendation. Always fine-tune using local soil test reports and agronomist advice.";

/// Commercial product quantities covering a nutrient deficit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProductQuantities {
    pub urea_kg_per_acre: f64,
    pub dap_kg_per_acre: f64,
    pub mop_kg_per_acre: f64,
}

/// Per-acre fertilizer recommendation for one crop and soil reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FertilizerPlan {
    pub target: NutrientTarget,
    /// Additional nutrients required, `max(0, target - reading)` per element
    pub need: NutrientReading,
    pub products: ProductQuantities,
    pub note: String,
}

/// Build a fertilizer plan from raw form values.
///
/// Total over its input domain: garbage readings clamp to zero and
/// unrecognized crops use the default target, so a well-formed plan is
/// always returned.
pub fn build_fertilizer_plan(crop: Crop, n: f64, p: f64, k: f64) -> FertilizerPlan {
    let reading = NutrientReading::capture(n, p, k);
    let target = targets_for(crop);

    let need_n = (target.n - reading.n).max(0.0);
    let need_p = (target.p - reading.p).max(0.0);
    let need_k = (target.k - reading.k).max(0.0);

    let urea_kg = if need_n > 0.0 { need_n / UREA_N_FRACTION } else { 0.0 };
    let dap_kg = if need_p > 0.0 { need_p / DAP_P_FRACTION } else { 0.0 };
    let mop_kg = if need_k > 0.0 { need_k / MOP_K_FRACTION } else { 0.0 };

    FertilizerPlan {
        target,
        need: NutrientReading {
            n: round1(need_n),
            p: round1(need_p),
            k: round1(need_k),
        },
        products: ProductQuantities {
            urea_kg_per_acre: round1(urea_kg),
            dap_kg_per_acre: round1(dap_kg),
            mop_kg_per_acre: round1(mop_kg),
        },
        note: FERTILIZER_PLAN_NOTE.to_string(),
    }
}

/// Round to one decimal place, half away from zero, floored at zero
fn round1(value: f64) -> f64 {
    if value <= 0.0 {
        return 0.0;
    }
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_for_rice_with_deficits() {
        let plan = build_fertilizer_plan(Crop::Rice, 60.0, 40.0, 50.0);
        assert_eq!(plan.need.n, 40.0);
        assert_eq!(plan.need.p, 10.0);
        assert_eq!(plan.need.k, 0.0);
        // 40 / 0.46 = 86.9565... -> 87.0, 10 / 0.46 = 21.739... -> 21.7
        assert_eq!(plan.products.urea_kg_per_acre, 87.0);
        assert_eq!(plan.products.dap_kg_per_acre, 21.7);
        assert_eq!(plan.products.mop_kg_per_acre, 0.0);
    }

    #[test]
    fn test_no_deficit_means_no_product() {
        let plan = build_fertilizer_plan(Crop::Wheat, 200.0, 200.0, 200.0);
        assert_eq!(plan.need, NutrientReading { n: 0.0, p: 0.0, k: 0.0 });
        assert_eq!(plan.products.urea_kg_per_acre, 0.0);
        assert_eq!(plan.products.dap_kg_per_acre, 0.0);
        assert_eq!(plan.products.mop_kg_per_acre, 0.0);
    }

    #[test]
    fn test_garbage_inputs_use_full_target() {
        let plan = build_fertilizer_plan(Crop::Other, f64::NAN, -30.0, f64::NEG_INFINITY);
        assert_eq!(plan.need.n, 80.0);
        assert_eq!(plan.need.p, 40.0);
        assert_eq!(plan.need.k, 40.0);
        assert!(plan.products.urea_kg_per_acre > 0.0);
    }

    #[test]
    fn test_plan_is_deterministic() {
        let a = build_fertilizer_plan(Crop::Maize, 30.0, 20.0, 10.0);
        let b = build_fertilizer_plan(Crop::Maize, 30.0, 20.0, 10.0);
        assert_eq!(a, b);
    }
}
