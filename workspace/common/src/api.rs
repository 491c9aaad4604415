use async_trait::async_trait;

use crate::{
    ApiError, BatchPrediction, HealthSnapshot, ModelsSnapshot, PredictionRequest, PredictionResult,
    StatusSnapshot,
};

/// Paths of the forecasting service, relative to the base URL.
pub mod endpoints {
    pub const STATUS: &str = "/";
    pub const HEALTH: &str = "/health";
    pub const MODELS: &str = "/models";
    pub const PREDICT: &str = "/predict";
    pub const BATCH_PREDICT: &str = "/batch_predict";
}

/// The five remote capabilities of the forecasting service.
///
/// Implemented over `gloo-net` in the browser and over `reqwest` in the
/// terminal client. Futures are not required to be `Send` so that browser
/// implementations qualify. Calls never retry and never cache.
#[async_trait(?Send)]
pub trait ForecastApi {
    /// `GET /health`
    async fn health(&self) -> Result<HealthSnapshot, ApiError>;

    /// `GET /models`
    async fn models(&self) -> Result<ModelsSnapshot, ApiError>;

    /// `POST /predict`
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, ApiError>;

    /// `POST /batch_predict`; not idempotent on the service side.
    async fn batch_predict(&self, requests: &[PredictionRequest]) -> Result<BatchPrediction, ApiError>;

    /// `GET /`
    async fn status(&self) -> Result<StatusSnapshot, ApiError>;
}
