//! System dashboard: a settle-all join over three service calls and the
//! panel view built from whatever arrived.

use chrono::TimeZone;
use std::fmt::Display;

use crate::format::{format_timestamp, model_label};
use crate::{ForecastApi, HealthSnapshot, ModelsSnapshot, StatusSnapshot};

const UNKNOWN: &str = "Unknown";
const NOT_AVAILABLE: &str = "N/A";

/// The three independently fetched dashboard records. A record is `None`
/// when its call failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub status: Option<StatusSnapshot>,
    pub health: Option<HealthSnapshot>,
    pub models: Option<ModelsSnapshot>,
}

impl DashboardSnapshot {
    /// Number of records that arrived.
    pub fn loaded_count(&self) -> usize {
        [self.status.is_some(), self.health.is_some(), self.models.is_some()]
            .into_iter()
            .filter(|loaded| *loaded)
            .count()
    }
}

/// Issue the status, health and models calls concurrently and wait for all
/// three to settle. Failures are logged and leave their record empty.
pub async fn load_dashboard<A>(api: &A) -> DashboardSnapshot
where
    A: ForecastApi + ?Sized,
{
    tracing::debug!("loading dashboard");
    let (status, health, models) = futures::join!(api.status(), api.health(), api.models());

    let status = status
        .inspect_err(|e| tracing::warn!(error = %e, "status call failed"))
        .ok();
    let health = health
        .inspect_err(|e| tracing::warn!(error = %e, "health call failed"))
        .ok();
    let models = models
        .inspect_err(|e| tracing::warn!(error = %e, "models call failed"))
        .ok();

    let snapshot = DashboardSnapshot { status, health, models };
    tracing::info!(loaded = snapshot.loaded_count(), "dashboard loaded");
    snapshot
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusPanel {
    pub status: String,
    /// Service reports `running`.
    pub healthy: bool,
    pub models_loaded: u32,
    pub features_available: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HealthPanel {
    pub status: String,
    /// Service reports `healthy`.
    pub healthy: bool,
    pub last_check: String,
    pub fallback_mode: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelsPanel {
    pub total_models: u32,
    pub feature_count: u32,
    /// Display labels; empty when no models are listed.
    pub models: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerformancePanel {
    pub best_model: &'static str,
    pub accuracy: &'static str,
    pub speed: &'static str,
    pub uptime: &'static str,
}

/// The four dashboard panels, with fallbacks filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub status: StatusPanel,
    pub health: HealthPanel,
    pub models: ModelsPanel,
    pub performance: PerformancePanel,
}

impl DashboardView {
    pub fn new<Tz>(snapshot: &DashboardSnapshot, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let status = match &snapshot.status {
            Some(s) => StatusPanel {
                status: s.status.clone(),
                healthy: s.status == "running",
                models_loaded: s.models_loaded,
                features_available: s.features_available,
            },
            None => StatusPanel {
                status: UNKNOWN.to_string(),
                healthy: false,
                models_loaded: 0,
                features_available: 0,
            },
        };

        let timestamp = snapshot.health.as_ref().and_then(|h| h.timestamp);
        let health = match &snapshot.health {
            Some(h) => HealthPanel {
                status: h.status.clone(),
                healthy: h.status == "healthy",
                last_check: timestamp
                    .map(|ts| format_timestamp(&ts.with_timezone(tz)))
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                fallback_mode: if h.models.fallback_mode { "Yes" } else { "No" },
            },
            None => HealthPanel {
                status: UNKNOWN.to_string(),
                healthy: false,
                last_check: NOT_AVAILABLE.to_string(),
                fallback_mode: "No",
            },
        };

        let models = match &snapshot.models {
            Some(m) => ModelsPanel {
                total_models: m.total_models,
                feature_count: m.feature_count,
                models: m.available_models.iter().map(|name| model_label(name)).collect(),
            },
            None => ModelsPanel {
                total_models: 0,
                feature_count: 0,
                models: Vec::new(),
            },
        };

        let performance = PerformancePanel {
            best_model: "Weighted Ensemble",
            accuracy: "$111.17 MAE",
            speed: "100+ predictions/sec",
            uptime: if timestamp.is_some() { "Active" } else { UNKNOWN },
        };

        Self { status, health, models, performance }
    }
}
