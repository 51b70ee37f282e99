//! Error handling for the Agro Advisor client
//!
//! The derivation engine itself is total; errors here come from the
//! surrounding application concerns (network, configuration, input files).

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Prediction service error: {status} - {body}")]
    PredictionService { status: u16, body: String },

    #[error("Request to prediction service failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("Could not read input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for the client
pub type AppResult<T> = Result<T, AppError>;
