//! Common types used across the advisory engine

use serde::{Deserialize, Serialize};

/// Crops with dedicated agronomic tables
///
/// Every other crop name resolves to [`Crop::Other`], which maps to the
/// generic "default" row of each knowledge table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Rice,
    Wheat,
    Maize,
    #[default]
    Other,
}

impl Crop {
    /// Resolve a crop name case-insensitively.
    ///
    /// Unknown, empty or missing names resolve to [`Crop::Other`]; this
    /// lookup never fails.
    pub fn resolve(name: Option<&str>) -> Self {
        match name.map(|n| n.trim().to_lowercase()).as_deref() {
            Some("rice") => Crop::Rice,
            Some("wheat") => Crop::Wheat,
            Some("maize") => Crop::Maize,
            _ => Crop::Other,
        }
    }

    /// Key used by the fixed knowledge tables
    pub fn key(&self) -> &'static str {
        match self {
            Crop::Rice => "rice",
            Crop::Wheat => "wheat",
            Crop::Maize => "maize",
            Crop::Other => "default",
        }
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Crop::Rice => write!(f, "Rice"),
            Crop::Wheat => write!(f, "Wheat"),
            Crop::Maize => write!(f, "Maize"),
            Crop::Other => write!(f, "this crop"),
        }
    }
}

/// Calendar month names, index 0 = January
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
