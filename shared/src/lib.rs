//! Shared types and the agronomic derivation engine for Agro Advisor
//!
//! This crate contains the pure, rule-based derivations that turn soil
//! readings and prediction-service results into display data (fertilizer
//! plan, yield estimate, crop calendar, rainfall guidance), plus the wire
//! payloads of the prediction service. It is shared between the client
//! application and the browser (via WASM).

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
