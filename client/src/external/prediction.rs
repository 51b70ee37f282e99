//! HTTP client for the model-serving prediction API
//!
//! Thin typed wrappers around the two primary endpoints
//! (`/api/recommend-crop`, `/api/predict-rainfall`) and the legacy
//! combined endpoint (`/api/predict`). The models behind them are an
//! opaque collaborator; this client only owns the payload contract.

use std::time::Duration;

use reqwest::Client;
use shared::models::prediction::{
    CombinedPrediction, CropPrediction, CropRequest, RainfallPrediction, RainfallRequest,
};

use crate::config::PredictionConfig;
use crate::error::{AppError, AppResult};

/// Prediction API client
#[derive(Clone)]
pub struct PredictionClient {
    client: Client,
    base_url: String,
}

impl PredictionClient {
    /// Create a new PredictionClient from configuration
    pub fn new(config: &PredictionConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a new PredictionClient with a custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Request a crop recommendation for the given field conditions
    pub async fn recommend_crop(&self, request: &CropRequest) -> AppResult<CropPrediction> {
        self.post_json("/api/recommend-crop", request).await
    }

    /// Request a rainfall estimate from the lag observations
    pub async fn predict_rainfall(
        &self,
        request: &RainfallRequest,
    ) -> AppResult<RainfallPrediction> {
        self.post_json("/api/predict-rainfall", request).await
    }

    /// Request the legacy combined prediction (rainfall + crop + advice)
    pub async fn predict_combined(&self, request: &CropRequest) -> AppResult<CombinedPrediction> {
        self.post_json("/api/predict", request).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::PredictionService { status, body });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = PredictionClient::with_base_url("http://localhost:5000/".to_string());
        assert_eq!(client.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_client_from_config() {
        let client = PredictionClient::new(&PredictionConfig::default()).unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:5000");
    }
}
