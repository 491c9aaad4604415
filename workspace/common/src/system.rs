use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusSnapshot {
    pub status: String,
    #[serde(default)]
    pub models_loaded: u32,
    #[serde(default)]
    pub features_available: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthSnapshot {
    pub status: String,
    #[serde(default, with = "crate::timestamp::option")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub models: HealthModels,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<HealthFeatures>,
}

/// Model section of the health snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HealthModels {
    #[serde(default)]
    pub total_loaded: u32,
    #[serde(default)]
    pub available_models: Vec<String>,
    /// Set when the service runs without its primary model set.
    #[serde(default)]
    pub fallback_mode: bool,
}

/// Feature section of the health snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HealthFeatures {
    #[serde(default)]
    pub total_features: u32,
    #[serde(default)]
    pub encoders_loaded: u32,
}

/// Response of `GET /models`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ModelsSnapshot {
    #[serde(default)]
    pub total_models: u32,
    #[serde(default)]
    pub feature_count: u32,
    #[serde(default)]
    pub available_models: Vec<String>,
}
