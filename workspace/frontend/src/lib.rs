use std::rc::Rc;

use common::state::{AppState, RequestSequence, ShellAction, Tab};
use common::{ForecastApi, PredictionRequest};
use yew::prelude::*;

mod components;
pub mod api_client;
pub mod widgets;
pub mod hooks;
pub mod settings;

use api_client::GlooForecastClient;
use components::dashboard::Dashboard;
use components::layout::{Footer, Header, TabBar};
use components::prediction_form::PredictionForm;
use components::results_display::ResultsDisplay;

/// Shell state as a Yew reducer. Actions the state machine rejects, such as
/// a superseded response, leave the handle untouched.
#[derive(Default, PartialEq)]
struct ShellStore(AppState);

impl Reducible for ShellStore {
    type Action = ShellAction;

    fn reduce(self: Rc<Self>, action: ShellAction) -> Rc<Self> {
        let mut next = self.0.clone();
        if next.apply(action) {
            Rc::new(ShellStore(next))
        } else {
            log::debug!("Shell action ignored");
            self
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let store = use_reducer(ShellStore::default);
    let sequence = use_mut_ref(RequestSequence::default);

    let on_predict = {
        let dispatcher = store.dispatcher();
        Callback::from(move |request: PredictionRequest| {
            let token = sequence.borrow_mut().next();
            dispatcher.dispatch(ShellAction::Submit(token));

            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                log::info!(
                    "Requesting prediction for store {} dept {} on {}",
                    request.store_id,
                    request.dept_id,
                    request.date
                );
                let client = GlooForecastClient::from_settings();
                let outcome = client.predict(&request).await;
                match &outcome {
                    Ok(result) => log::info!("Prediction received: {:.2}", result.predicted_sales),
                    Err(e) => log::error!("Prediction failed: {}", e),
                }
                dispatcher.dispatch(ShellAction::Resolve { token, outcome });
            });
        })
    };

    let on_select = {
        let dispatcher = store.dispatcher();
        Callback::from(move |tab: Tab| dispatcher.dispatch(ShellAction::SwitchTab(tab)))
    };

    let state = &store.0;
    let content = match state.active_tab() {
        Tab::Predict => html! {
            <>
                <PredictionForm {on_predict} loading={state.is_loading()} />
                <ResultsDisplay
                    result={state.prediction().cloned()}
                    error={state.error().map(str::to_string)}
                />
            </>
        },
        Tab::Dashboard => html! { <Dashboard /> },
    };

    html! {
        <div class="min-h-screen bg-base-200">
            <Header />
            <main class="container mx-auto p-6">
                <TabBar active={state.active_tab()} {on_select} />
                { content }
                <Footer />
            </main>
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== SalesCast Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
