use common::dashboard::{load_dashboard, DashboardSnapshot};
use yew::prelude::*;

use crate::api_client::GlooForecastClient;

/// API fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> FetchState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }
}

/// Fetch status, health and models once on mount.
///
/// Stays `Loading` until all three calls have settled. Failed calls leave
/// their record empty and are only logged.
#[hook]
pub fn use_dashboard() -> UseStateHandle<FetchState<DashboardSnapshot>> {
    let fetch_state = use_state(FetchState::default);

    {
        let fetch_state = fetch_state.clone();
        use_effect_with((), move |_| {
            log::debug!("Dashboard mounted, fetching status, health and models");
            wasm_bindgen_futures::spawn_local(async move {
                let client = GlooForecastClient::from_settings();
                let snapshot = load_dashboard(&client).await;
                log::info!("Dashboard loaded {} of 3 records", snapshot.loaded_count());
                fetch_state.set(FetchState::Success(snapshot));
            });
            || ()
        });
    }

    fetch_state
}
