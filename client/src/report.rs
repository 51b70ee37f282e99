//! Text rendering of the advisory views
//!
//! Turns stored predictions plus the derivation engine's outputs into the
//! advisory report shown to the user. All agronomic numbers come from
//! `shared`; this module only formats them.

use shared::models::calendar::calendar_for;
use shared::models::fertilizer::build_fertilizer_plan;
use shared::models::prediction::{CropRecord, RainfallRecord};
use shared::models::rainfall::{classify_rainfall, month_profile};
use shared::models::tips::tips_for;
use shared::models::yield_estimate::build_yield_estimate;
use shared::types::Crop;

/// Render the full advisory report for the latest predictions.
///
/// Either record may be absent; the report degrades to an empty-state
/// message per section, mirroring the dashboard behaviour.
pub fn advisory_report(crop: Option<&CropRecord>, rain: Option<&RainfallRecord>) -> String {
    let mut out = String::new();
    out.push_str("=== Agro Advisor ===\n\n");

    match crop {
        Some(record) => {
            let rainfall = rain.map(|r| r.prediction.rainfall);
            out.push_str(&crop_section(record, rainfall));
        }
        None => out.push_str(
            "No crop recommendation yet. Submit field conditions to get a prediction.\n",
        ),
    }

    out.push('\n');

    match rain {
        Some(record) => out.push_str(&rainfall_section(record)),
        None => out.push_str(
            "No rainfall prediction yet. Provide lag rainfall values to estimate rainfall.\n",
        ),
    }

    out
}

/// Recommended crop, tips, fertilizer plan, yield estimate and calendar
pub fn crop_section(record: &CropRecord, last_rainfall_mm: Option<f64>) -> String {
    let prediction = &record.prediction;
    let input = &record.input;
    let crop = Crop::resolve(Some(&prediction.crop));

    let mut out = String::new();
    out.push_str(&format!("Recommended crop: {}\n", prediction.crop));
    if let Some(confidence) = prediction.confidence {
        out.push_str(&format!("Confidence: {:.1}%\n", confidence * 100.0));
    }
    let alternatives = prediction.top3_percentages();
    if !alternatives.is_empty() {
        out.push_str("Alternatives:\n");
        for (label, pct) in &alternatives {
            out.push_str(&format!("  - {} ({:.1}%)\n", label, pct));
        }
    }

    let tips = tips_for(crop);
    out.push_str(&format!("\n{}\n", tips.title));
    for tip in tips.bullets {
        out.push_str(&format!("  - {}\n", tip));
    }

    let plan = build_fertilizer_plan(crop, input.n, input.p, input.k);
    out.push_str("\nFertilizer recommendation (per acre)\n");
    out.push_str(&format!(
        "  Target NPK: N {} / P {} / K {} kg/acre\n",
        plan.target.n, plan.target.p, plan.target.k
    ));
    out.push_str(&format!(
        "  Additional needed: N {} / P {} / K {} kg/acre\n",
        plan.need.n, plan.need.p, plan.need.k
    ));
    out.push_str(&format!(
        "  Urea: {} kg/acre (46% N)\n  DAP: {} kg/acre (46% P2O5)\n  MOP: {} kg/acre (60% K2O)\n",
        plan.products.urea_kg_per_acre, plan.products.dap_kg_per_acre, plan.products.mop_kg_per_acre
    ));
    out.push_str(&format!("  Note: {}\n", plan.note));

    let estimate = build_yield_estimate(crop, input.n, input.p, input.k, last_rainfall_mm);
    out.push_str("\nEstimated yield potential\n");
    out.push_str(&format!(
        "  {} t/ha ({} potential, base {} t/ha)\n",
        estimate.estimated_yield, estimate.level, estimate.base_yield
    ));
    out.push_str(&format!(
        "  Nutrient sufficiency score: {}\n",
        estimate.nutrient_score
    ));
    match estimate.rainfall_used {
        Some(rain) => out.push_str(&format!(
            "  Rainfall suitability score: {} (predicted {:.1} mm vs ideal ~{} mm)\n",
            estimate.rainfall_score, rain, estimate.ideal_rainfall
        )),
        None => out.push_str(&format!(
            "  Rainfall suitability score: {} (neutral, no rainfall prediction yet)\n",
            estimate.rainfall_score
        )),
    }

    let calendar = calendar_for(crop);
    out.push_str(&format!("\n{}\n", calendar.title));
    for phase in &calendar.phases {
        out.push_str(&format!("  {} ({})\n    {}\n", phase.stage, phase.window, phase.notes));
    }

    out
}

/// Predicted rainfall with its level, seasonal context and guidance
pub fn rainfall_section(record: &RainfallRecord) -> String {
    let prediction = &record.prediction;
    let level = classify_rainfall(Some(prediction.rainfall));
    let profile = month_profile(record.input.month);

    let mut out = String::new();
    out.push_str(&format!(
        "Predicted rainfall: {:.2} {} (Level: {})\n",
        prediction.rainfall, prediction.unit, level
    ));
    out.push_str(&format!(
        "{} \u{2022} {}\n  Typical pattern: {}\n",
        profile.name, profile.phase, profile.typical
    ));

    let advice = level.field_advice();
    if !advice.is_empty() {
        out.push_str("What this means for your field:\n");
        for line in advice {
            out.push_str(&format!("  - {}\n", line));
        }
    }

    out.push_str("Suggested focus for the next 7 days:\n");
    for task in level.next_seven_day_tasks() {
        out.push_str(&format!("  - {}\n", task));
    }

    out
}
