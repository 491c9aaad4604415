use common::state::Tab;
use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <div class="navbar bg-primary text-primary-content shadow-sm">
            <div class="container mx-auto px-4 py-4 flex-col items-start">
                <h1 class="text-3xl font-bold">{"🏪 Walmart Sales Forecasting"}</h1>
                <p class="opacity-80">{"Advanced ML-powered sales prediction system"}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    let tabs = [Tab::Predict, Tab::Dashboard].into_iter().map(|tab| {
        let on_select = props.on_select.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            log::debug!("Switching to tab: {}", tab.title());
            on_select.emit(tab);
        });
        html! {
            <button
                class={classes!("tab", (props.active == tab).then_some("tab-active"))}
                {onclick}
            >
                {tab.title()}
            </button>
        }
    });

    html! {
        <div role="tablist" class="tabs tabs-bordered mb-6">
            { for tabs }
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let stats = [
        ("Models:", "6 Advanced ML Models"),
        ("Features:", "89 Engineered Features"),
        ("Accuracy:", "$111.17 MAE"),
        ("Speed:", "100+ predictions/sec"),
    ];

    html! {
        <div class="card bg-base-100 shadow mt-10">
            <div class="card-body">
                <h3 class="card-title">{"About This System"}</h3>
                <p>
                    {"This professional sales forecasting system uses 6 advanced machine learning models \
                      with 89 engineered features to predict weekly sales for Walmart stores. \
                      The system achieves high accuracy with a Mean Absolute Error of $111.17."}
                </p>
                <div class="grid grid-cols-1 md:grid-cols-4 gap-4 mt-4">
                    { for stats.iter().map(|(label, value)| html! {
                        <div class="bg-base-200 rounded p-3 text-center">
                            <strong>{*label}</strong>{" "}{*value}
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}
