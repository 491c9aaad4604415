use anyhow::{Context, Result};
use common::{ForecastApi, PredictionRequest};
use std::path::Path;
use tracing::{debug, error, info, trace};

use super::query::emit;
use crate::cli::Session;
use crate::render;

/// Read a JSON array of prediction requests.
pub fn read_requests(path: &Path) -> Result<Vec<PredictionRequest>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let requests: Vec<PredictionRequest> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of prediction requests", path.display()))?;
    Ok(requests)
}

/// Post every request in `path` to the batch endpoint. Not retried: the
/// service does not treat batches as idempotent.
pub async fn batch_predict(session: &Session, path: &Path) -> Result<()> {
    trace!("Entering batch_predict command");
    let requests = read_requests(path)?;
    debug!("Loaded {} requests from {}", requests.len(), path.display());

    let response = match session.client.batch_predict(&requests).await {
        Ok(response) => response,
        Err(e) => {
            error!("Batch prediction failed: {}", e);
            return Err(anyhow::anyhow!(e.user_message()));
        }
    };

    info!("Received {} predictions", response.batch_size);
    emit(session, &response, render::batch)
}
