//! Rainfall level classification, seasonal month profiles and guidance

use serde::{Deserialize, Serialize};

/// Qualitative rainfall level for a monthly total (mm)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RainfallLevel {
    Unknown,
    VeryLow,
    LowToModerate,
    GoodAdequate,
    High,
    VeryHighHeavy,
}

impl std::fmt::Display for RainfallLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RainfallLevel::Unknown => write!(f, "Unknown"),
            RainfallLevel::VeryLow => write!(f, "Very Low"),
            RainfallLevel::LowToModerate => write!(f, "Low to Moderate"),
            RainfallLevel::GoodAdequate => write!(f, "Good / Adequate"),
            RainfallLevel::High => write!(f, "High"),
            RainfallLevel::VeryHighHeavy => write!(f, "Very High / Heavy"),
        }
    }
}

/// Bucket a predicted rainfall value into a qualitative level.
///
/// Intervals are half-open with inclusive lower bounds; missing or NaN
/// input classifies as `Unknown` rather than failing.
pub fn classify_rainfall(value_mm: Option<f64>) -> RainfallLevel {
    let value = match value_mm {
        Some(v) if !v.is_nan() => v,
        _ => return RainfallLevel::Unknown,
    };
    if value < 20.0 {
        RainfallLevel::VeryLow
    } else if value < 60.0 {
        RainfallLevel::LowToModerate
    } else if value < 120.0 {
        RainfallLevel::GoodAdequate
    } else if value < 200.0 {
        RainfallLevel::High
    } else {
        RainfallLevel::VeryHighHeavy
    }
}

impl RainfallLevel {
    /// Field-level advice shown next to the classified prediction
    pub fn field_advice(&self) -> &'static [&'static str] {
        match self {
            RainfallLevel::Unknown => &[],
            RainfallLevel::VeryLow => &[
                "Plan supplemental irrigation or choose drought-tolerant crops.",
                "Mulch the soil to conserve moisture and reduce evaporation.",
            ],
            RainfallLevel::LowToModerate => &[
                "Good for early vegetative stages with controlled irrigation.",
                "Monitor soil moisture; avoid waterlogging sensitive crops.",
            ],
            RainfallLevel::GoodAdequate => &[
                "Favourable for most field crops if drainage is proper.",
                "Use this window for nutrient applications and intercultivation.",
            ],
            RainfallLevel::High => &[
                "Ensure drainage to avoid waterlogging and root diseases.",
                "Avoid heavy field operations when soil is saturated.",
            ],
            RainfallLevel::VeryHighHeavy => &[
                "High risk of flooding / lodging; strengthen bunds and drainage.",
                "Post-rain, check for nutrient leaching and apply top up if needed.",
            ],
        }
    }

    /// Suggested focus for the next 7 days of field work
    pub fn next_seven_day_tasks(&self) -> &'static [&'static str] {
        match self {
            RainfallLevel::VeryLow => &[
                "Plan supplemental irrigation if crop is in vegetative/flowering stage.",
                "Use mulching to conserve soil moisture and reduce evaporation.",
                "Avoid heavy nitrogen top-dressing until some moisture is available.",
            ],
            RainfallLevel::LowToModerate => &[
                "Good for early establishment – schedule light irrigation only if soil cracks.",
                "Plan weeding & intercultivation; soil is moist enough to work.",
                "Check canal/borewell availability in case next spell is delayed.",
            ],
            RainfallLevel::GoodAdequate => &[
                "Ideal window for nutrient application (top-dress N & K) if crop stage matches.",
                "Use this moisture to complete any pending gap-filling or thinning.",
                "Monitor for foliar diseases after 3–4 continuous cloudy days.",
            ],
            RainfallLevel::High => &[
                "Inspect drainage channels and bunds to avoid standing water.",
                "Avoid entering fields with machinery until topsoil dries slightly.",
                "Watch out for root diseases and nutrient leaching; plan corrective spray/basal later.",
            ],
            RainfallLevel::VeryHighHeavy => &[
                "High risk of waterlogging – open emergency drains where possible.",
                "Post-rain: check for lodging, root rot and yellowing due to nutrient wash-out.",
                "Delay sowing/planting until field is workable; avoid compaction.",
            ],
            RainfallLevel::Unknown => &[
                "Use the predicted rainfall along with local IMD / weather apps.",
                "Adjust irrigation and field operations based on real-time conditions.",
            ],
        }
    }
}

/// Typical rainfall behaviour for one calendar month (generic Indian
/// monsoon pattern)
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MonthProfile {
    /// 1-based calendar month
    pub month: u32,
    pub name: &'static str,
    pub phase: &'static str,
    pub typical: &'static str,
}

/// Seasonal monsoon profile, one entry per calendar month
pub const RAINFALL_SEASONS: [MonthProfile; 12] = [
    MonthProfile {
        month: 1,
        name: "January",
        phase: "Winter / Dry",
        typical: "Very low rainfall; cool & dry conditions.",
    },
    MonthProfile {
        month: 2,
        name: "February",
        phase: "Winter / Pre-Heat",
        typical: "Generally dry with slowly rising temperatures.",
    },
    MonthProfile {
        month: 3,
        name: "March",
        phase: "Pre-Monsoon",
        typical: "Hotter days; occasional thunderstorms in some regions.",
    },
    MonthProfile {
        month: 4,
        name: "April",
        phase: "Pre-Monsoon",
        typical: "Very warm; convective showers possible by evening.",
    },
    MonthProfile {
        month: 5,
        name: "May",
        phase: "Pre-Monsoon / Onset Prep",
        typical: "Peak summer; first monsoon clouds build up in south.",
    },
    MonthProfile {
        month: 6,
        name: "June",
        phase: "SW Monsoon Onset",
        typical: "Monsoon sets in; rainfall quickly increases.",
    },
    MonthProfile {
        month: 7,
        name: "July",
        phase: "SW Monsoon Peak",
        typical: "Very high rainfall; major water recharge month.",
    },
    MonthProfile {
        month: 8,
        name: "August",
        phase: "SW Monsoon Active",
        typical: "Sustained monsoon with breaks; good crop moisture.",
    },
    MonthProfile {
        month: 9,
        name: "September",
        phase: "SW Monsoon Withdrawal",
        typical: "Rains start reducing; transition to post-monsoon.",
    },
    MonthProfile {
        month: 10,
        name: "October",
        phase: "NE Monsoon / Post-Monsoon",
        typical: "Rain in east & south; retreating monsoon showers.",
    },
    MonthProfile {
        month: 11,
        name: "November",
        phase: "NE Monsoon / Cool",
        typical: "Rainy spells in some regions; temps start to drop.",
    },
    MonthProfile {
        month: 12,
        name: "December",
        phase: "Winter Onset",
        typical: "Mostly dry and cooler; isolated showers possible.",
    },
];

/// Look up the seasonal profile for a 1-based month, falling back to
/// January for out-of-range input.
pub fn month_profile(month: u32) -> &'static MonthProfile {
    month
        .checked_sub(1)
        .and_then(|idx| RAINFALL_SEASONS.get(idx as usize))
        .unwrap_or(&RAINFALL_SEASONS[0])
}

/// Estimate the current month's rainfall as the mean of the three lag
/// observations. Non-finite lags contribute zero.
pub fn estimate_rainfall_from_lags(lag1: f64, lag2: f64, lag3: f64) -> f64 {
    let coerce = |v: f64| if v.is_finite() { v } else { 0.0 };
    (coerce(lag1) + coerce(lag2) + coerce(lag3)) / 3.0
}
