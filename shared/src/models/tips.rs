//! Per-crop agronomic tips knowledge base

use serde::Serialize;

use crate::types::Crop;

/// Titled tip list for one crop
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CropTips {
    pub title: &'static str,
    pub bullets: &'static [&'static str],
}

const RICE_TIPS: CropTips = CropTips {
    title: "Rice – Tips for Better Yield",
    bullets: &[
        "Maintain standing water (2–5 cm) during most growth stages; avoid complete drying.",
        "Prepare a well puddled field with good bunding to reduce water loss.",
        "Apply basal NPK as per soil test; split nitrogen into 3–4 doses (basal, tillering, \
         panicle initiation).",
        "Keep fields weed-free during the first 30–40 days using hand weeding or pre-emergence \
         herbicides.",
        "Monitor for pests like stem borer and leaf folder; use recommended IPM practices \
         instead of only chemical sprays.",
    ],
};

const WHEAT_TIPS: CropTips = CropTips {
    title: "Wheat – Tips for Better Yield",
    bullets: &[
        "Use well-drained loam soil; avoid waterlogging at crown root initiation stage.",
        "Sow with proper spacing and recommended seed rate to avoid overcrowding.",
        "Apply nitrogen in 2–3 splits (basal + crown root initiation + booting) for better \
         grain filling.",
        "Irrigate at critical stages: CRI, tillering, booting, flowering and milk stage if \
         water is available.",
        "Keep rust and foliar diseases under check with timely monitoring and recommended \
         fungicides.",
    ],
};

const MAIZE_TIPS: CropTips = CropTips {
    title: "Maize – Tips for Better Yield",
    bullets: &[
        "Ensure good land preparation and proper seed depth (3–5 cm) for uniform emergence.",
        "Maintain optimum plant population with recommended row and plant spacing.",
        "Provide adequate NPK, especially nitrogen split across early growth and knee-high \
         stages.",
        "Avoid moisture stress at tasseling and silking stages; irrigate if rainfall is not \
         sufficient.",
        "Control weeds during the first 30–35 days using intercultivation or suitable \
         herbicides.",
    ],
};

const DEFAULT_TIPS: CropTips = CropTips {
    title: "General Tips for Maximizing Yield",
    bullets: &[
        "Follow soil testing and apply NPK based on recommendations rather than guesswork.",
        "Choose disease-free quality seeds of recommended varieties/hybrids.",
        "Time your sowing with optimum temperature and expected rainfall for the crop.",
        "Keep the field weed-free during early growth to reduce competition for nutrients \
         and light.",
        "Monitor pests and diseases regularly and adopt integrated pest management (IPM).",
    ],
};

/// Look up the tips for a crop; unknown crops get the general list.
pub fn tips_for(crop: Crop) -> &'static CropTips {
    match crop {
        Crop::Rice => &RICE_TIPS,
        Crop::Wheat => &WHEAT_TIPS,
        Crop::Maize => &MAIZE_TIPS,
        Crop::Other => &DEFAULT_TIPS,
    }
}
