//! Wire payloads for the external prediction service and stored records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Input fields for a crop recommendation request
///
/// Field renames match the JSON contract of the prediction service.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct CropRequest {
    #[validate(range(min = 1, max = 12))]
    pub month: u32,
    #[validate(range(min = 0.0))]
    pub lag1: f64,
    #[validate(range(min = 0.0))]
    pub lag2: f64,
    #[validate(range(min = 0.0))]
    pub lag3: f64,
    #[serde(rename = "N")]
    #[validate(range(min = 0.0))]
    pub n: f64,
    #[serde(rename = "P")]
    #[validate(range(min = 0.0))]
    pub p: f64,
    #[serde(rename = "K")]
    #[validate(range(min = 0.0))]
    pub k: f64,
    pub temperature: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub humidity: f64,
    #[serde(rename = "pH")]
    #[validate(range(min = 0.0, max = 14.0))]
    pub ph: f64,
}

impl Default for CropRequest {
    fn default() -> Self {
        Self {
            month: 11,
            lag1: 60.0,
            lag2: 55.0,
            lag3: 50.0,
            n: 60.0,
            p: 40.0,
            k: 50.0,
            temperature: 23.0,
            humidity: 55.0,
            ph: 6.2,
        }
    }
}

/// Input fields for a rainfall prediction request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct RainfallRequest {
    #[validate(range(min = 1, max = 12))]
    pub month: u32,
    #[validate(range(min = 0.0))]
    pub lag1: f64,
    #[validate(range(min = 0.0))]
    pub lag2: f64,
    #[validate(range(min = 0.0))]
    pub lag3: f64,
}

impl Default for RainfallRequest {
    fn default() -> Self {
        Self {
            month: 11,
            lag1: 60.0,
            lag2: 55.0,
            lag3: 50.0,
        }
    }
}

impl From<&CropRequest> for RainfallRequest {
    fn from(req: &CropRequest) -> Self {
        Self {
            month: req.month,
            lag1: req.lag1,
            lag2: req.lag2,
            lag3: req.lag3,
        }
    }
}

/// Crop recommendation returned by the prediction service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropPrediction {
    pub crop: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top3: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top3_probs: Option<Vec<f64>>,
}

impl CropPrediction {
    /// Top-3 alternatives as (label, percentage) pairs.
    ///
    /// When probabilities are missing or their count does not match the
    /// labels, the probability mass is split evenly.
    pub fn top3_percentages(&self) -> Vec<(String, f64)> {
        let labels = match &self.top3 {
            Some(labels) if !labels.is_empty() => labels,
            _ => return Vec::new(),
        };
        let probs: Vec<f64> = match &self.top3_probs {
            Some(probs) if probs.len() == labels.len() => {
                probs.iter().map(|p| p * 100.0).collect()
            }
            _ => vec![100.0 / labels.len() as f64; labels.len()],
        };
        labels.iter().cloned().zip(probs).collect()
    }
}

/// Rainfall estimate returned by the prediction service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RainfallPrediction {
    /// Predicted monthly rainfall (mm)
    pub rainfall: f64,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One alternative crop from the legacy combined endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropAlternative {
    pub crop: String,
    pub score: f64,
}

/// Response of the legacy combined endpoint (`POST /api/predict`)
///
/// Functionally equivalent to the crop + rainfall pair, different shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CombinedPrediction {
    pub predicted_rainfall: f64,
    pub main_crop: String,
    pub main_crop_score: f64,
    pub alternatives: Vec<CropAlternative>,
    pub advice: String,
}

/// A stored crop recommendation with its echoed input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropRecord {
    pub id: Uuid,
    pub prediction: CropPrediction,
    pub input: CropRequest,
    pub created_at: DateTime<Utc>,
}

impl CropRecord {
    pub fn new(prediction: CropPrediction, input: CropRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            prediction,
            input,
            created_at: Utc::now(),
        }
    }
}

/// A stored rainfall prediction with its echoed input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RainfallRecord {
    pub id: Uuid,
    pub prediction: RainfallPrediction,
    pub input: RainfallRequest,
    pub created_at: DateTime<Utc>,
}

impl RainfallRecord {
    pub fn new(prediction: RainfallPrediction, input: RainfallRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            prediction,
            input,
            created_at: Utc::now(),
        }
    }
}
