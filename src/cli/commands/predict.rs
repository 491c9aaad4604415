use anyhow::{Result, bail};
use chrono::Local;
use common::state::{AppState, RequestSequence, ShellAction};
use common::{ForecastApi, PredictionRequest};
use tracing::{debug, info, trace};

use crate::cli::Session;
use crate::render;

/// Run one prediction through the shell state machine and print the
/// results panel. Fails with the user-facing message when the service does.
pub async fn predict(session: &Session, request: PredictionRequest) -> Result<()> {
    trace!("Entering predict command");
    debug!("Prediction request: {:?}", request);

    let mut sequence = RequestSequence::default();
    let mut shell = AppState::default();

    let token = sequence.next();
    shell.apply(ShellAction::Submit(token));
    let outcome = session.client.predict(&request).await;

    if session.json {
        if let Ok(result) = &outcome {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
    }
    shell.apply(ShellAction::Resolve { token, outcome });

    if let Some(message) = shell.error() {
        bail!("{message}");
    }
    if let Some(result) = shell.prediction() {
        info!(
            "Predicted sales for store {} dept {}: {:.2}",
            result.store_id, result.dept_id, result.predicted_sales
        );
    }
    if !session.json {
        if let Some(text) = render::results(&shell.results_view(&Local)) {
            println!("{text}");
        }
    }
    Ok(())
}
