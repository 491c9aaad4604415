//! Top-level state of the client shell and its transitions.
//!
//! Each prediction submission is tagged with a [`RequestToken`]. Only the
//! response for the most recently begun token is applied; anything older
//! is a superseded request and is dropped.

use chrono::TimeZone;
use std::fmt::Display;

use crate::results::{ResultsView, results_view};
use crate::{ApiError, PredictionResult};

/// Identifies one prediction submission. Later submissions compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

/// Monotonically increasing source of [`RequestToken`]s.
#[derive(Debug, Default)]
pub struct RequestSequence {
    last: u64,
}

impl RequestSequence {
    pub fn next(&mut self) -> RequestToken {
        self.last += 1;
        RequestToken(self.last)
    }
}

/// Which view of the shell is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Predict,
    Dashboard,
}

impl Tab {
    pub fn title(self) -> &'static str {
        match self {
            Tab::Predict => "Make Prediction",
            Tab::Dashboard => "System Dashboard",
        }
    }
}

/// Shell transitions, as dispatched by the UI.
#[derive(Debug)]
pub enum ShellAction {
    Submit(RequestToken),
    Resolve {
        token: RequestToken,
        outcome: Result<PredictionResult, ApiError>,
    },
    SwitchTab(Tab),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    prediction: Option<PredictionResult>,
    error: Option<String>,
    loading: bool,
    active_tab: Tab,
    latest: Option<RequestToken>,
}

impl AppState {
    pub fn prediction(&self) -> Option<&PredictionResult> {
        self.prediction.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a prediction request is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Idle -> Pending. Clears the previous result and error. A token older
    /// than the latest begun one is ignored.
    pub fn begin(&mut self, token: RequestToken) -> bool {
        if self.latest.is_some_and(|latest| token <= latest) {
            tracing::debug!(?token, "ignoring out-of-order submission");
            return false;
        }
        self.latest = Some(token);
        self.prediction = None;
        self.error = None;
        self.loading = true;
        true
    }

    /// Pending -> Idle with a result or an error message. Returns `false`
    /// when the response belongs to a superseded submission.
    pub fn resolve(&mut self, token: RequestToken, outcome: Result<PredictionResult, ApiError>) -> bool {
        if self.latest != Some(token) || !self.loading {
            tracing::debug!(?token, latest = ?self.latest, "dropping stale prediction response");
            return false;
        }
        match outcome {
            Ok(result) => {
                self.prediction = Some(result);
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "prediction failed");
                self.error = Some(err.user_message());
                self.prediction = None;
            }
        }
        self.loading = false;
        true
    }

    /// Tab switches never touch prediction state.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Apply a dispatched action; returns whether state changed.
    pub fn apply(&mut self, action: ShellAction) -> bool {
        match action {
            ShellAction::Submit(token) => self.begin(token),
            ShellAction::Resolve { token, outcome } => self.resolve(token, outcome),
            ShellAction::SwitchTab(tab) => {
                let changed = self.active_tab != tab;
                self.switch_tab(tab);
                changed
            }
        }
    }

    /// What the results panel should show for the current state.
    pub fn results_view<Tz>(&self, tz: &Tz) -> ResultsView
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        results_view(self.error(), self.prediction(), tz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GENERIC_PREDICTION_ERROR;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn result(store_id: i32) -> PredictionResult {
        PredictionResult {
            store_id,
            dept_id: 1,
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            predicted_sales: 1000.0,
            confidence_interval: crate::ConfidenceInterval(900.0, 1100.0),
            model_used: "weighted_ensemble".to_string(),
            prediction_timestamp: Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_submit_then_success() {
        let mut sequence = RequestSequence::default();
        let mut state = AppState::default();

        let token = sequence.next();
        assert!(state.apply(ShellAction::Submit(token)));
        assert!(state.is_loading());
        assert!(state.prediction().is_none());

        assert!(state.apply(ShellAction::Resolve { token, outcome: Ok(result(5)) }));
        assert!(!state.is_loading());
        assert_eq!(state.prediction().map(|p| p.store_id), Some(5));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_failure_shows_server_detail() {
        let mut sequence = RequestSequence::default();
        let mut state = AppState::default();

        let token = sequence.next();
        state.begin(token);
        state.resolve(token, Ok(result(1)));

        let token = sequence.next();
        state.begin(token);
        assert!(state.prediction().is_none(), "submit clears the prior result");
        let outcome = Err(ApiError::Server {
            status: 400,
            detail: Some("Store ID must be between 1 and 45".to_string()),
        });
        state.resolve(token, outcome);

        assert_eq!(state.error(), Some("Store ID must be between 1 and 45"));
        assert!(state.prediction().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_failure_without_detail_uses_generic_message() {
        let mut sequence = RequestSequence::default();
        let mut state = AppState::default();

        let token = sequence.next();
        state.begin(token);
        state.resolve(token, Err(ApiError::Transport("connection refused".to_string())));
        assert_eq!(state.error(), Some(GENERIC_PREDICTION_ERROR));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut sequence = RequestSequence::default();
        let mut state = AppState::default();

        let first = sequence.next();
        let second = sequence.next();
        state.begin(first);
        state.begin(second);

        assert!(!state.resolve(first, Ok(result(1))));
        assert!(state.is_loading());
        assert!(state.prediction().is_none());

        assert!(state.resolve(second, Ok(result(2))));
        assert_eq!(state.prediction().map(|p| p.store_id), Some(2));

        // a late failure for the first submission changes nothing
        assert!(!state.resolve(first, Err(ApiError::Transport("timeout".to_string()))));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_out_of_order_submit_is_ignored() {
        let mut sequence = RequestSequence::default();
        let mut state = AppState::default();

        let first = sequence.next();
        let second = sequence.next();
        assert!(state.begin(second));
        assert!(!state.begin(first));
        assert!(state.resolve(second, Ok(result(2))));
    }

    #[test]
    fn test_tab_switch_preserves_prediction_state() {
        let mut sequence = RequestSequence::default();
        let mut state = AppState::default();
        assert_eq!(state.active_tab(), Tab::Predict);

        let token = sequence.next();
        state.begin(token);
        state.resolve(token, Ok(result(7)));
        let before = state.clone();

        assert!(state.apply(ShellAction::SwitchTab(Tab::Dashboard)));
        assert_eq!(state.active_tab(), Tab::Dashboard);
        assert!(state.apply(ShellAction::SwitchTab(Tab::Predict)));
        assert!(!state.apply(ShellAction::SwitchTab(Tab::Predict)));

        assert_eq!(state, before);
    }

    #[test]
    fn test_results_view_follows_state() {
        let mut sequence = RequestSequence::default();
        let mut state = AppState::default();
        assert_eq!(state.results_view(&Utc), ResultsView::Empty);

        let token = sequence.next();
        state.begin(token);
        state.resolve(token, Err(ApiError::Server { status: 500, detail: None }));
        assert_eq!(
            state.results_view(&Utc),
            ResultsView::Error(GENERIC_PREDICTION_ERROR.to_string())
        );
    }
}
