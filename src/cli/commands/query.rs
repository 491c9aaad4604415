use anyhow::Result;
use common::ForecastApi;
use serde::Serialize;
use tracing::{error, info, trace};

use crate::cli::Session;
use crate::render;

/// Print either the raw JSON or the rendered text of a response.
pub(crate) fn emit<T: Serialize>(session: &Session, value: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
    if session.json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text(value));
    }
    Ok(())
}

pub async fn status(session: &Session) -> Result<()> {
    trace!("Entering status command");
    let snapshot = match session.client.status().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to fetch status: {}", e);
            return Err(e.into());
        }
    };
    info!("Service status: {}", snapshot.status);
    emit(session, &snapshot, render::status)
}

pub async fn health(session: &Session) -> Result<()> {
    trace!("Entering health command");
    let snapshot = match session.client.health().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to fetch health: {}", e);
            return Err(e.into());
        }
    };
    info!("Service health: {}", snapshot.status);
    emit(session, &snapshot, render::health)
}

pub async fn models(session: &Session) -> Result<()> {
    trace!("Entering models command");
    let snapshot = match session.client.models().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to fetch models: {}", e);
            return Err(e.into());
        }
    };
    info!("Fetched {} models", snapshot.total_models);
    emit(session, &snapshot, render::models)
}
