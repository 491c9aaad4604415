use async_trait::async_trait;
use common::{
    endpoints, ApiError, BatchPrediction, ForecastApi, HealthSnapshot, ModelsSnapshot,
    PredictionRequest, PredictionResult, StatusSnapshot,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::settings;

const JSON: &str = "application/json";

/// Browser client for the forecasting service.
#[derive(Debug, Clone, PartialEq)]
pub struct GlooForecastClient {
    base_url: String,
}

impl GlooForecastClient {
    /// Client pointed at the configured base URL.
    pub fn from_settings() -> Self {
        Self {
            base_url: settings::get_settings().api_base_url,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn get<T>(&self, endpoint: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        log::debug!("GET request to: {}", url);

        let response = Request::get(&url)
            .header("Content-Type", JSON)
            .send()
            .await
            .map_err(|e| {
                log::error!("GET {} - Request failed: {}", endpoint, e);
                ApiError::Transport(e.to_string())
            })?;

        read("GET", endpoint, response).await
    }

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(endpoint);
        log::debug!("POST request to: {}", url);

        let response = Request::post(&url)
            .json(body)
            .map_err(|e| {
                log::error!("POST {} - Failed to serialize request: {}", endpoint, e);
                ApiError::Transport(e.to_string())
            })?
            .send()
            .await
            .map_err(|e| {
                log::error!("POST {} - Request failed: {}", endpoint, e);
                ApiError::Transport(e.to_string())
            })?;

        read("POST", endpoint, response).await
    }
}

async fn read<T>(method: &str, endpoint: &str, response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    if !response.ok() {
        log::warn!("{} {} - Non-OK response: {}", method, endpoint, response.status());
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_response(response.status(), &body);
        log::error!("{} {} - {}", method, endpoint, err);
        return Err(err);
    }

    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    let parsed = response.json::<T>().await.map_err(|e| {
        log::error!("{} {} - Failed to parse response: {}", method, endpoint, e);
        ApiError::Decode(e.to_string())
    })?;

    log::info!("{} {} - Success", method, endpoint);
    Ok(parsed)
}

#[async_trait(?Send)]
impl ForecastApi for GlooForecastClient {
    async fn health(&self) -> Result<HealthSnapshot, ApiError> {
        self.get(endpoints::HEALTH).await
    }

    async fn models(&self) -> Result<ModelsSnapshot, ApiError> {
        self.get(endpoints::MODELS).await
    }

    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, ApiError> {
        self.post(endpoints::PREDICT, request).await
    }

    async fn batch_predict(&self, requests: &[PredictionRequest]) -> Result<BatchPrediction, ApiError> {
        self.post(endpoints::BATCH_PREDICT, requests).await
    }

    async fn status(&self) -> Result<StatusSnapshot, ApiError> {
        self.get(endpoints::STATUS).await
    }
}
