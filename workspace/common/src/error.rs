use serde::Deserialize;
use thiserror::Error;

/// Message shown when a failed prediction carries no server detail.
pub const GENERIC_PREDICTION_ERROR: &str = "An error occurred while making the prediction";

/// Error returned by every [`crate::ForecastApi`] call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No response was received.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status.
    #[error("HTTP error {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Server { status: u16, detail: Option<String> },

    /// A 2xx body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Error body produced by the service. `detail` is usually a string, but
/// request validation failures return a list of objects instead.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl ApiError {
    /// Build a server error from a non-2xx status and its raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .and_then(|d| match d {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            });
        ApiError::Server { status, detail }
    }

    /// Human-readable message supplied by the server, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Server { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// The message the prediction flow shows to the user.
    pub fn user_message(&self) -> String {
        self.detail().unwrap_or(GENERIC_PREDICTION_ERROR).to_string()
    }
}
