use chrono::Local;
use common::dashboard::DashboardView;
use yew::prelude::*;

use crate::widgets::loading::LoadingCard;
use crate::hooks::use_dashboard;

#[derive(Properties, PartialEq)]
struct StatusIndicatorProps {
    healthy: bool,
    label: String,
}

#[function_component(StatusIndicator)]
fn status_indicator(props: &StatusIndicatorProps) -> Html {
    let dot = if props.healthy { "badge-success" } else { "badge-error" };
    html! {
        <div class="flex items-center gap-2 mb-2">
            <span class={classes!("badge", "badge-xs", dot)}></span>
            <span class="font-medium">{&props.label}</span>
        </div>
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let fetch_state = use_dashboard();

    let Some(snapshot) = fetch_state.data() else {
        log::trace!("Dashboard still loading");
        return html! { <LoadingCard message="Loading dashboard..." /> };
    };

    let view = DashboardView::new(snapshot, &Local);
    let (status, health, models, perf) = (&view.status, &view.health, &view.models, &view.performance);

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"System Dashboard"}</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div class="bg-base-200 rounded p-4">
                        <h3 class="font-semibold mb-2">{"System Status"}</h3>
                        <StatusIndicator healthy={status.healthy} label={status.status.clone()} />
                        <p>{format!("Models Loaded: {}", status.models_loaded)}</p>
                        <p>{format!("Features Available: {}", status.features_available)}</p>
                    </div>
                    <div class="bg-base-200 rounded p-4">
                        <h3 class="font-semibold mb-2">{"Health Check"}</h3>
                        <StatusIndicator healthy={health.healthy} label={health.status.clone()} />
                        <p>{format!("Last Check: {}", health.last_check)}</p>
                        <p>{format!("Fallback Mode: {}", health.fallback_mode)}</p>
                    </div>
                    <div class="bg-base-200 rounded p-4">
                        <h3 class="font-semibold mb-2">{"Available Models"}</h3>
                        <p>{format!("Total Models: {}", models.total_models)}</p>
                        <p>{format!("Feature Count: {}", models.feature_count)}</p>
                        {if models.models.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <div class="mt-2">
                                    <strong>{"Models:"}</strong>
                                    <ul class="list-disc list-inside">
                                        { for models.models.iter().map(|name| html! { <li>{name}</li> }) }
                                    </ul>
                                </div>
                            }
                        }}
                    </div>
                    <div class="bg-base-200 rounded p-4">
                        <h3 class="font-semibold mb-2">{"Performance"}</h3>
                        <p>{format!("Best Model: {}", perf.best_model)}</p>
                        <p>{format!("Accuracy: {}", perf.accuracy)}</p>
                        <p>{format!("Speed: {}", perf.speed)}</p>
                        <p>{format!("Uptime: {}", perf.uptime)}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
