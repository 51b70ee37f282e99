//! Agro Advisor - field advisory client
//!
//! Sends field conditions to the model-serving prediction API, keeps the
//! latest predictions in the shared store, and renders the derived
//! advisory report (fertilizer plan, yield estimate, crop calendar,
//! rainfall guidance).

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shared::models::prediction::{CropRecord, CropRequest, RainfallRecord, RainfallRequest};
use shared::validation::validate_crop_request;

mod config;
mod error;
mod external;
mod report;
mod store;

pub use config::Config;

use error::{AppError, AppResult};
use external::prediction::PredictionClient;
use store::PredictionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agro_advisor=debug,reqwest=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Agro Advisor");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Prediction service: {}", config.prediction.base_url);

    let request = load_request()?;
    validate_crop_request(&request).map_err(AppError::InvalidInput)?;

    let client = PredictionClient::new(&config.prediction)?;
    let store = PredictionStore::new();

    run_advisory(&client, &store, &request).await?;

    print!(
        "{}",
        report::advisory_report(store.last_crop().as_ref(), store.last_rain().as_ref())
    );

    Ok(())
}

/// Fetch predictions and publish them into the store.
///
/// A rainfall failure is logged but tolerated: the yield estimate falls
/// back to its neutral rainfall score. A crop recommendation failure is
/// fatal because every downstream derivation keys off the crop.
async fn run_advisory(
    client: &PredictionClient,
    store: &PredictionStore,
    request: &CropRequest,
) -> AppResult<()> {
    let rain_request = RainfallRequest::from(request);
    match client.predict_rainfall(&rain_request).await {
        Ok(prediction) => {
            tracing::info!("Predicted rainfall: {:.2} {}", prediction.rainfall, prediction.unit);
            store.set_last_rain(RainfallRecord::new(prediction, rain_request));
        }
        Err(err) => {
            tracing::error!("Rainfall prediction failed: {}", err);
        }
    }

    let prediction = client.recommend_crop(request).await?;
    tracing::info!("Recommended crop: {}", prediction.crop);
    store.set_last_crop(CropRecord::new(prediction, request.clone()));

    Ok(())
}

/// Read the field conditions, either from a JSON file given as the first
/// argument or from the built-in defaults.
fn load_request() -> AppResult<CropRequest> {
    match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!("Reading field conditions from {}", path);
            let contents = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&contents)?)
        }
        None => Ok(CropRequest::default()),
    }
}
