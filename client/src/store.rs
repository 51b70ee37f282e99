//! Shared "last prediction" store
//!
//! Holds the most recent crop and rainfall predictions for all downstream
//! derivations. Created empty at application start, set once per
//! successful prediction, cleared only on session reset. Injected
//! explicitly wherever it is read, never accessed as a global.

use std::sync::RwLock;

use shared::models::prediction::{CropRecord, RainfallRecord};

/// Container for the latest prediction results
#[derive(Debug, Default)]
pub struct PredictionStore {
    last_crop: RwLock<Option<CropRecord>>,
    last_rain: RwLock<Option<RainfallRecord>>,
}

impl PredictionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a successful crop recommendation
    pub fn set_last_crop(&self, record: CropRecord) {
        *self.write_crop() = Some(record);
    }

    /// Publish a successful rainfall prediction
    pub fn set_last_rain(&self, record: RainfallRecord) {
        *self.write_rain() = Some(record);
    }

    /// Latest crop recommendation, if any prediction has succeeded yet
    pub fn last_crop(&self) -> Option<CropRecord> {
        self.last_crop
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Latest rainfall prediction, if any prediction has succeeded yet
    pub fn last_rain(&self) -> Option<RainfallRecord> {
        self.last_rain
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Rainfall value available for yield estimation
    pub fn last_rainfall_mm(&self) -> Option<f64> {
        self.last_rain().map(|record| record.prediction.rainfall)
    }

    /// Reset the store to its initial empty state
    pub fn clear(&self) {
        *self.write_crop() = None;
        *self.write_rain() = None;
    }

    fn write_crop(&self) -> std::sync::RwLockWriteGuard<'_, Option<CropRecord>> {
        self.last_crop.write().unwrap_or_else(|e| e.into_inner())
    }

    fn write_rain(&self) -> std::sync::RwLockWriteGuard<'_, Option<RainfallRecord>> {
        self.last_rain.write().unwrap_or_else(|e| e.into_inner())
    }
}
