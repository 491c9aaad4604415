use crate::client::HttpForecastClient;
use crate::config::ClientConfig;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use common::PredictionRequest;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Naive timestamp in the format the forecasting service emits.
pub const SERVICE_TIMESTAMP: &str = "2024-03-15T10:30:00.123456";

/// Knobs for the stub forecasting service.
#[derive(Debug, Clone, Default)]
pub struct StubOptions {
    /// Make `GET /` answer 503.
    pub fail_status: bool,
}

#[derive(Clone, Default)]
struct StubState {
    options: StubOptions,
    content_type: Arc<Mutex<Option<String>>>,
}

/// Handle to a running stub service.
pub struct StubService {
    pub base_url: String,
    content_type: Arc<Mutex<Option<String>>>,
}

impl StubService {
    /// Content-Type header of the last prediction request.
    pub fn last_content_type(&self) -> Option<String> {
        self.content_type.lock().unwrap().clone()
    }

    pub fn client(&self) -> HttpForecastClient {
        client_for(&self.base_url)
    }
}

pub fn client_for(base_url: &str) -> HttpForecastClient {
    let config = ClientConfig {
        api_base_url: base_url.to_string(),
        ..ClientConfig::default()
    };
    HttpForecastClient::new(&config).expect("Failed to build client")
}

pub fn prediction_json(request: &PredictionRequest) -> Value {
    json!({
        "store_id": request.store_id,
        "dept_id": request.dept_id,
        "date": request.date,
        "predicted_sales": 15234.56,
        "confidence_interval": [13000.12, 17500.99],
        "model_used": "weighted_ensemble",
        "prediction_timestamp": SERVICE_TIMESTAMP,
    })
}

async fn status(State(state): State<StubState>) -> Response {
    if state.options.fail_status {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"detail": "Service unavailable"})),
        )
            .into_response();
    }
    Json(json!({
        "status": "running",
        "models_loaded": 3,
        "features_available": 45,
        "message": "Walmart Sales Forecasting API is running",
    }))
    .into_response()
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": SERVICE_TIMESTAMP,
        "models": {
            "total_loaded": 3,
            "available_models": ["random_forest", "xgboost", "weighted_ensemble"],
            "fallback_mode": false,
        },
        "features": {"total_features": 45, "encoders_loaded": 4},
    }))
}

async fn models() -> Json<Value> {
    Json(json!({
        "total_models": 3,
        "feature_count": 45,
        "available_models": ["random_forest", "xgboost", "weighted_ensemble"],
    }))
}

async fn predict(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(request): Json<PredictionRequest>,
) -> Response {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    *state.content_type.lock().unwrap() = content_type;

    match request.store_id {
        0 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response(),
        id if id > 45 => (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Store ID must be between 1 and 45"})),
        )
            .into_response(),
        _ => Json(prediction_json(&request)).into_response(),
    }
}

async fn batch_predict(Json(requests): Json<Vec<PredictionRequest>>) -> Json<Value> {
    let predictions: Vec<Value> = requests.iter().map(prediction_json).collect();
    Json(json!({
        "predictions": predictions,
        "batch_size": requests.len(),
        "timestamp": SERVICE_TIMESTAMP,
    }))
}

/// Start the stub service on an ephemeral port.
pub async fn spawn_stub(options: StubOptions) -> StubService {
    let state = StubState {
        options,
        ..StubState::default()
    };
    let content_type = state.content_type.clone();

    let app = Router::new()
        .route("/", get(status))
        .route("/health", get(health))
        .route("/models", get(models))
        .route("/predict", post(predict))
        .route("/batch_predict", post(batch_predict))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Failed to read stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub service failed");
    });

    StubService {
        base_url: format!("http://{addr}"),
        content_type,
    }
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to read probe address");
    drop(listener);
    format!("http://{addr}")
}

/// Initialize tracing for tests with output to STDERR.
///
/// The log level is taken from RUST_LOG, defaulting to WARN. Keep the
/// returned guard alive for the duration of the test.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}
