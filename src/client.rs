use async_trait::async_trait;
use common::{
    ApiError, BatchPrediction, ForecastApi, HealthSnapshot, ModelsSnapshot, PredictionRequest,
    PredictionResult, StatusSnapshot, endpoints,
};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, trace, warn};

use crate::config::ClientConfig;

/// `reqwest` implementation of the forecasting service API.
#[derive(Debug, Clone)]
pub struct HttpForecastClient {
    http: Client,
    base_url: String,
}

impl HttpForecastClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn get<T>(&self, endpoint: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!("GET request to: {}", url);

        let response = self.http.get(&url).send().await.map_err(|e| {
            error!("GET {} - Request failed: {}", endpoint, e);
            ApiError::Transport(e.to_string())
        })?;

        Self::read("GET", endpoint, response).await
    }

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(endpoint);
        debug!("POST request to: {}", url);

        let response = self.http.post(&url).json(body).send().await.map_err(|e| {
            error!("POST {} - Request failed: {}", endpoint, e);
            ApiError::Transport(e.to_string())
        })?;

        Self::read("POST", endpoint, response).await
    }

    async fn read<T>(method: &str, endpoint: &str, response: Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            warn!("{} {} - Non-OK response: {}", method, endpoint, status);
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_response(status.as_u16(), &body);
            error!("{} {} - {}", method, endpoint, err);
            return Err(err);
        }

        trace!("{} {} - Response received, parsing JSON", method, endpoint);
        let body = response.text().await.map_err(|e| {
            error!("{} {} - Failed to read body: {}", method, endpoint, e);
            ApiError::Transport(e.to_string())
        })?;
        let parsed = serde_json::from_str(&body).map_err(|e| {
            error!("{} {} - Failed to parse response: {}", method, endpoint, e);
            ApiError::Decode(e.to_string())
        })?;

        info!("{} {} - Success", method, endpoint);
        Ok(parsed)
    }
}

#[async_trait(?Send)]
impl ForecastApi for HttpForecastClient {
    async fn health(&self) -> Result<HealthSnapshot, ApiError> {
        self.get(endpoints::HEALTH).await
    }

    async fn models(&self) -> Result<ModelsSnapshot, ApiError> {
        self.get(endpoints::MODELS).await
    }

    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, ApiError> {
        debug!(
            "Requesting prediction for store {} dept {} on {}",
            request.store_id, request.dept_id, request.date
        );
        self.post(endpoints::PREDICT, request).await
    }

    async fn batch_predict(&self, requests: &[PredictionRequest]) -> Result<BatchPrediction, ApiError> {
        debug!("Requesting batch of {} predictions", requests.len());
        self.post(endpoints::BATCH_PREDICT, requests).await
    }

    async fn status(&self) -> Result<StatusSnapshot, ApiError> {
        self.get(endpoints::STATUS).await
    }
}
