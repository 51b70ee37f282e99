//! Crop growth-stage calendars and the 4-week grid projection
//!
//! Each crop has a fixed sequence of growth phases with structured week
//! windows. The projector expands a calendar into a navigable 28-day grid,
//! one 4-week block at a time.

use serde::{Deserialize, Serialize};

use crate::types::{Crop, MONTH_NAMES};

/// Weeks shown per navigation block
pub const WEEKS_PER_BLOCK: u32 = 4;
/// Days shown per navigation block (4 weeks x 7 days)
pub const DAYS_PER_BLOCK: u32 = 28;

/// One growth stage with its inclusive week window.
///
/// Week numbers are structured data; `window` is display prose derived
/// from them. Window start may be 0 for pre-establishment work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrowthPhase {
    pub stage: String,
    pub week_start: u32,
    pub week_end: u32,
    /// Display label, e.g. "Week 3–4"
    pub window: String,
    pub notes: String,
}

/// Fixed growth-stage timeline for a crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropCalendar {
    pub title: String,
    pub phases: Vec<GrowthPhase>,
}

/// One cell of the projected 28-day grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    /// Day number within the block, 1..=28
    pub day: u32,
    /// Week row within the block, 1..=4
    pub visual_week: u32,
    /// Week number on the whole-season scale
    pub global_week: u32,
    /// Stage name of the matched phase; `None` renders as an empty cell
    pub stage: Option<String>,
    /// Index of the matched phase in `CropCalendar::phases`
    pub phase_index: Option<usize>,
}

/// Legend entry for one phase of the projected calendar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LegendEntry {
    pub stage: String,
    pub window: String,
}

/// A 4-week view into a crop calendar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarGrid {
    /// Calendar month shown for this block; advances one month per block
    /// and wraps circularly, independent of the real season length
    pub month_label: String,
    /// First global week covered by this block
    pub first_week: u32,
    /// Last global week covered by this block
    pub last_week: u32,
    pub days: Vec<CalendarDay>,
    pub legend: Vec<LegendEntry>,
    /// The clamped offset actually shown
    pub block_offset: u32,
    pub max_block_offset: u32,
    pub can_go_prev: bool,
    pub can_go_next: bool,
}

fn phase(stage: &str, week_start: u32, week_end: u32, notes: &str) -> GrowthPhase {
    GrowthPhase {
        stage: stage.to_string(),
        week_start,
        week_end,
        window: format!("Week {}\u{2013}{}", week_start, week_end),
        notes: notes.to_string(),
    }
}

/// Look up the growth-stage calendar for a crop.
///
/// Same resolution rule as the nutrient tables: unknown crops get the
/// generic calendar, never an absent value.
pub fn calendar_for(crop: Crop) -> CropCalendar {
    match crop {
        Crop::Rice => CropCalendar {
            title: "Rice Crop Calendar (Typical Season)".to_string(),
            phases: vec![
                phase(
                    "Sowing / Nursery",
                    0,
                    2,
                    "Prepare nursery beds or trays; use treated seeds and maintain adequate \
                     moisture for uniform germination.",
                ),
                phase(
                    "Transplanting / Early Establishment",
                    3,
                    4,
                    "Transplant healthy seedlings into well puddled main field; maintain shallow \
                     water layer (2–3 cm).",
                ),
                phase(
                    "Tillering & Nutrient Boost",
                    4,
                    7,
                    "Apply split nitrogen dose; keep weeds under control and maintain 2–5 cm \
                     water level.",
                ),
                phase(
                    "Panicle Initiation / Flowering",
                    8,
                    11,
                    "Very sensitive stage to water stress; ensure continuous moisture and monitor \
                     for major pests and diseases.",
                ),
                phase(
                    "Grain Filling & Maturity",
                    12,
                    16,
                    "Drain excess water 7–10 days before harvest; avoid lodging and plan harvest \
                     at proper grain moisture.",
                ),
            ],
        },
        Crop::Wheat => CropCalendar {
            title: "Wheat Crop Calendar (Typical Season)".to_string(),
            phases: vec![
                phase(
                    "Seedbed Preparation & Sowing",
                    0,
                    2,
                    "Ensure fine, firm seedbed; sow with recommended spacing and depth to ensure \
                     uniform emergence.",
                ),
                phase(
                    "Crown Root Initiation",
                    3,
                    4,
                    "Critical stage for first irrigation and top-dressing of nitrogen to build \
                     strong root and tiller base.",
                ),
                phase(
                    "Tillering & Vegetative Growth",
                    5,
                    8,
                    "Maintain adequate moisture; weed control is important to avoid yield loss.",
                ),
                phase(
                    "Booting & Flowering",
                    9,
                    11,
                    "Protect against foliar diseases and ensure no moisture stress during \
                     flowering.",
                ),
                phase(
                    "Grain Filling & Ripening",
                    12,
                    15,
                    "Irrigate if needed at milk and dough stages; harvest at physiological \
                     maturity to reduce shattering.",
                ),
            ],
        },
        Crop::Maize => CropCalendar {
            title: "Maize Crop Calendar (Typical Season)".to_string(),
            phases: vec![
                phase(
                    "Land Preparation & Sowing",
                    0,
                    2,
                    "Prepare well-tilled soil and sow at correct depth; ensure optimum plant \
                     population per acre.",
                ),
                phase(
                    "Early Vegetative",
                    2,
                    4,
                    "Maintain soil moisture and control early weeds; first nitrogen application \
                     around 3–4 leaf stage.",
                ),
                phase(
                    "Knee-High to Tasseling",
                    5,
                    8,
                    "Second major nitrogen application; avoid water stress during tasseling and \
                     silking.",
                ),
                phase(
                    "Silking & Pollination",
                    8,
                    10,
                    "Very critical for yield; maintain good moisture and monitor for pests like \
                     fall armyworm.",
                ),
                phase(
                    "Grain Filling & Maturity",
                    11,
                    14,
                    "Reduce irrigation closer to harvest; pick cobs at proper maturity to ensure \
                     good grain quality.",
                ),
            ],
        },
        Crop::Other => CropCalendar {
            title: "Generic Crop Calendar (Illustrative)".to_string(),
            phases: vec![
                phase(
                    "Sowing / Establishment",
                    0,
                    2,
                    "Use quality seeds, correct sowing depth and spacing; ensure good seed–soil \
                     contact.",
                ),
                phase(
                    "Early Growth",
                    2,
                    5,
                    "Weed management and early nutrient support are crucial to avoid competition \
                     and stress.",
                ),
                phase(
                    "Vegetative Peak",
                    5,
                    8,
                    "Apply split nitrogen as needed; monitor pest and disease pressure regularly.",
                ),
                phase(
                    "Flowering / Reproductive Stage",
                    8,
                    11,
                    "Most sensitive stage to water and nutrient stress; maintain adequate \
                     moisture and crop protection.",
                ),
                phase(
                    "Maturity & Harvest",
                    11,
                    14,
                    "Plan harvest at correct maturity to balance yield and quality; avoid \
                     mechanical damage and losses.",
                ),
            ],
        },
    }
}

/// Largest valid block offset for a calendar
pub fn max_block_offset(calendar: &CropCalendar) -> u32 {
    let max_week = calendar
        .phases
        .iter()
        .map(|p| p.week_end)
        .max()
        .unwrap_or(0);
    max_week.saturating_sub(1) / WEEKS_PER_BLOCK
}

/// Project one 4-week block of a crop calendar into a 28-day grid.
///
/// `start_month` is the 1-based month the season begins in; the requested
/// `block_offset` is clamped into the valid range. Re-projection with
/// identical inputs is deterministic.
pub fn project_grid(calendar: &CropCalendar, start_month: u32, block_offset: i32) -> CalendarGrid {
    let max_offset = max_block_offset(calendar);
    let offset = block_offset.max(0) as u32;
    let offset = offset.min(max_offset);

    let month_index = (start_month.max(1) - 1 + offset) % 12;
    let month_label = MONTH_NAMES[month_index as usize].to_string();

    let legend = calendar
        .phases
        .iter()
        .map(|p| LegendEntry {
            stage: p.stage.clone(),
            window: p.window.clone(),
        })
        .collect();

    let min_start = calendar.phases.iter().map(|p| p.week_start).min();
    let max_end = calendar.phases.iter().map(|p| p.week_end).max();

    let mut days = Vec::with_capacity(DAYS_PER_BLOCK as usize);
    for day in 1..=DAYS_PER_BLOCK {
        let visual_week = day.div_ceil(7);
        let global_week = offset * WEEKS_PER_BLOCK + visual_week;

        // Linear scan keeps overwriting, so the last declared phase wins
        // when windows overlap.
        let mut matched: Option<usize> = None;
        for (idx, p) in calendar.phases.iter().enumerate() {
            if global_week >= p.week_start && global_week <= p.week_end {
                matched = Some(idx);
            }
        }

        // Weeks outside every window snap to the nearest boundary phase;
        // interior gaps stay unmatched.
        if matched.is_none() && !calendar.phases.is_empty() {
            if let (Some(min_start), Some(max_end)) = (min_start, max_end) {
                if global_week < min_start {
                    matched = Some(0);
                } else if global_week > max_end {
                    matched = Some(calendar.phases.len() - 1);
                }
            }
        }

        days.push(CalendarDay {
            day,
            visual_week,
            global_week,
            stage: matched.map(|idx| calendar.phases[idx].stage.clone()),
            phase_index: matched,
        });
    }

    CalendarGrid {
        month_label,
        first_week: offset * WEEKS_PER_BLOCK + 1,
        last_week: offset * WEEKS_PER_BLOCK + WEEKS_PER_BLOCK,
        days,
        legend,
        block_offset: offset,
        max_block_offset: max_offset,
        can_go_prev: offset > 0,
        can_go_next: offset < max_offset,
    }
}
