//! Validation helpers for user-entered field values
//!
//! The derivation engine itself is total and never rejects input; these
//! checks exist so the UI can flag implausible values before a request is
//! sent to the prediction service.

use crate::models::prediction::{CropRequest, RainfallRequest};

/// Validate a 1-based calendar month
pub fn validate_month(month: u32) -> Result<(), &'static str> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err("Month must be between 1 and 12")
    }
}

/// Validate a soil nutrient reading (kg/acre)
pub fn validate_nutrient(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() {
        return Err("Nutrient reading must be a number");
    }
    if value < 0.0 {
        return Err("Nutrient reading cannot be negative");
    }
    Ok(())
}

/// Validate a lag rainfall observation (mm)
pub fn validate_lag_rainfall(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() {
        return Err("Lag rainfall must be a number");
    }
    if value < 0.0 {
        return Err("Lag rainfall cannot be negative");
    }
    Ok(())
}

/// Validate relative humidity (percent)
pub fn validate_humidity(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() || value < 0.0 || value > 100.0 {
        return Err("Humidity must be between 0 and 100");
    }
    Ok(())
}

/// Validate soil pH
pub fn validate_ph(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() || value < 0.0 || value > 14.0 {
        return Err("Soil pH must be between 0 and 14");
    }
    Ok(())
}

/// Validate a full crop recommendation request
pub fn validate_crop_request(request: &CropRequest) -> Result<(), &'static str> {
    validate_month(request.month)?;
    for lag in [request.lag1, request.lag2, request.lag3] {
        validate_lag_rainfall(lag)?;
    }
    for nutrient in [request.n, request.p, request.k] {
        validate_nutrient(nutrient)?;
    }
    if !request.temperature.is_finite() {
        return Err("Temperature must be a number");
    }
    validate_humidity(request.humidity)?;
    validate_ph(request.ph)
}

/// Validate a rainfall prediction request
pub fn validate_rainfall_request(request: &RainfallRequest) -> Result<(), &'static str> {
    validate_month(request.month)?;
    for lag in [request.lag1, request.lag2, request.lag3] {
        validate_lag_rainfall(lag)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_month() {
        assert!(validate_month(1).is_ok());
        assert!(validate_month(12).is_ok());
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());
    }

    #[test]
    fn test_validate_nutrient() {
        assert!(validate_nutrient(0.0).is_ok());
        assert!(validate_nutrient(120.0).is_ok());
        assert!(validate_nutrient(-1.0).is_err());
        assert!(validate_nutrient(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_humidity_and_ph() {
        assert!(validate_humidity(55.0).is_ok());
        assert!(validate_humidity(101.0).is_err());
        assert!(validate_ph(6.2).is_ok());
        assert!(validate_ph(15.0).is_err());
    }

    #[test]
    fn test_validate_default_requests() {
        assert!(validate_crop_request(&CropRequest::default()).is_ok());
        assert!(validate_rainfall_request(&RainfallRequest::default()).is_ok());
    }

    #[test]
    fn test_validate_crop_request_rejects_bad_fields() {
        let request = CropRequest {
            humidity: 150.0,
            ..CropRequest::default()
        };
        assert!(validate_crop_request(&request).is_err());

        let request = CropRequest {
            lag2: -3.0,
            ..CropRequest::default()
        };
        assert_eq!(
            validate_crop_request(&request),
            Err("Lag rainfall cannot be negative")
        );
    }
}
