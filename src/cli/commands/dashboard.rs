use anyhow::Result;
use chrono::Local;
use common::dashboard::{DashboardSnapshot, DashboardView, load_dashboard};
use serde_json::json;
use tracing::{info, trace};

use crate::cli::Session;
use crate::render;

fn snapshot_json(snapshot: &DashboardSnapshot) -> serde_json::Value {
    json!({
        "status": snapshot.status,
        "health": snapshot.health,
        "models": snapshot.models,
    })
}

/// Fetch status, health and models concurrently and print the panels.
/// Individual failures fall back to placeholders and never fail the command.
pub async fn dashboard(session: &Session) -> Result<()> {
    trace!("Entering dashboard command");
    let snapshot = load_dashboard(&session.client).await;
    info!("Dashboard ready with {} of 3 records", snapshot.loaded_count());

    if session.json {
        println!("{}", serde_json::to_string_pretty(&snapshot_json(&snapshot))?);
    } else {
        println!("{}", render::dashboard(&DashboardView::new(&snapshot, &Local)));
    }
    Ok(())
}
