//! Plain-text rendering of the client views for the terminal.

use chrono::{DateTime, Local, Utc};
use common::dashboard::DashboardView;
use common::format::{format_currency, format_currency_range, format_timestamp, model_label};
use common::results::{PredictionView, ResultsView};
use common::{BatchPrediction, HealthSnapshot, ModelsSnapshot, StatusSnapshot};

fn indicator(healthy: bool) -> &'static str {
    if healthy { "[ok]" } else { "[!!]" }
}

fn local(ts: &DateTime<Utc>) -> String {
    format_timestamp(&ts.with_timezone(&Local))
}

/// Results panel. `None` when there is nothing to show.
pub fn results(view: &ResultsView) -> Option<String> {
    match view {
        ResultsView::Error(message) => Some(format!("Error: {message}")),
        ResultsView::Empty => None,
        ResultsView::Prediction(prediction) => Some(prediction_panel(prediction)),
    }
}

pub fn prediction_panel(view: &PredictionView) -> String {
    let fields: Vec<String> = view
        .fields()
        .iter()
        .map(|(label, value)| format!("  {:<20} {}", format!("{label}:"), value))
        .collect();
    format!(
        "Prediction Results\n{}\n\nSummary\n  {}",
        fields.join("\n"),
        view.summary()
    )
}

pub fn dashboard(view: &DashboardView) -> String {
    let status = &view.status;
    let health = &view.health;
    let models = &view.models;
    let perf = &view.performance;

    let mut lines = vec![
        "System Dashboard".to_string(),
        String::new(),
        format!("System Status {} {}", indicator(status.healthy), status.status),
        format!("  Models Loaded: {}", status.models_loaded),
        format!("  Features Available: {}", status.features_available),
        String::new(),
        format!("Health Check {} {}", indicator(health.healthy), health.status),
        format!("  Last Check: {}", health.last_check),
        format!("  Fallback Mode: {}", health.fallback_mode),
        String::new(),
        "Available Models".to_string(),
        format!("  Total Models: {}", models.total_models),
        format!("  Feature Count: {}", models.feature_count),
    ];
    if !models.models.is_empty() {
        lines.push("  Models:".to_string());
        lines.extend(models.models.iter().map(|model| format!("    - {model}")));
    }
    lines.extend([
        String::new(),
        "Performance".to_string(),
        format!("  Best Model: {}", perf.best_model),
        format!("  Accuracy: {}", perf.accuracy),
        format!("  Speed: {}", perf.speed),
        format!("  Uptime: {}", perf.uptime),
    ]);
    lines.join("\n")
}

pub fn status(status: &StatusSnapshot) -> String {
    let summary = format!(
        "Status: {} {}\nModels Loaded: {}\nFeatures Available: {}",
        indicator(status.status == "running"),
        status.status,
        status.models_loaded,
        status.features_available
    );
    match &status.message {
        Some(message) => format!("{summary}\nMessage: {message}"),
        None => summary,
    }
}

pub fn health(health: &HealthSnapshot) -> String {
    let summary = format!(
        "Health: {} {}\nLast Check: {}\nFallback Mode: {}\nModels Loaded: {}",
        indicator(health.status == "healthy"),
        health.status,
        health.timestamp.as_ref().map(local).unwrap_or_else(|| "N/A".to_string()),
        if health.models.fallback_mode { "Yes" } else { "No" },
        health.models.total_loaded,
    );
    match &health.features {
        Some(features) => format!(
            "{summary}\nFeatures: {}\nEncoders Loaded: {}",
            features.total_features, features.encoders_loaded
        ),
        None => summary,
    }
}

pub fn models(models: &ModelsSnapshot) -> String {
    let mut lines = vec![
        format!("Total Models: {}", models.total_models),
        format!("Feature Count: {}", models.feature_count),
    ];
    lines.extend(
        models
            .available_models
            .iter()
            .map(|model| format!("  - {}", model_label(model))),
    );
    lines.join("\n")
}

pub fn batch(batch: &BatchPrediction) -> String {
    let header = format!("Batch of {} predictions ({})", batch.batch_size, local(&batch.timestamp));
    let rows = batch.predictions.iter().map(|p| {
        format!(
            "  Store #{:<3} Dept #{:<3} {}  {:>14}  [{}]  {}",
            p.store_id,
            p.dept_id,
            p.date,
            format_currency(p.predicted_sales),
            format_currency_range(p.confidence_interval.low(), p.confidence_interval.high()),
            model_label(&p.model_used),
        )
    });
    std::iter::once(header).chain(rows).collect::<Vec<_>>().join("\n")
}
