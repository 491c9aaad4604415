//! Common types shared between the web client and the terminal client.
//! The transport structs mirror the forecasting service's request/response
//! payloads; everything above the transport (form coercion, formatting,
//! the dashboard join and the shell state machine) is written once here
//! against the [`ForecastApi`] seam so both clients behave identically.

mod api;
mod error;
mod prediction;
mod system;

pub mod dashboard;
pub mod format;
pub mod form;
pub mod results;
pub mod state;
pub mod timestamp;

pub use api::{ForecastApi, endpoints};
pub use error::{ApiError, GENERIC_PREDICTION_ERROR};
pub use prediction::{BatchPrediction, ConfidenceInterval, PredictionRequest, PredictionResult};
pub use system::{HealthFeatures, HealthModels, HealthSnapshot, ModelsSnapshot, StatusSnapshot};

/// Default base URL of the forecasting service.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
