use chrono::Local;
use common::results::{results_view, ResultsView};
use common::PredictionResult;
use yew::prelude::*;

use crate::widgets::error::ErrorDisplay;

#[derive(Properties, PartialEq)]
pub struct ResultsDisplayProps {
    #[prop_or_default]
    pub result: Option<PredictionResult>,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(ResultsDisplay)]
pub fn results_display(props: &ResultsDisplayProps) -> Html {
    let view = results_view(props.error.as_deref(), props.result.as_ref(), &Local);

    let prediction = match view {
        ResultsView::Error(message) => return html! { <ErrorDisplay {message} /> },
        ResultsView::Empty => return html! {},
        ResultsView::Prediction(prediction) => prediction,
    };

    let items = prediction.fields().into_iter().map(|(label, value)| {
        let value_class = if label == "Predicted Sales" {
            classes!("text-2xl", "font-bold", "text-success")
        } else {
            classes!()
        };
        html! {
            <div class="bg-base-200 rounded p-4 border-l-4 border-success">
                <h3 class="text-sm uppercase tracking-wide text-gray-500 mb-2">{label}</h3>
                <p class={value_class}>{value}</p>
            </div>
        }
    });

    html! {
        <div class="card bg-base-100 shadow mt-6">
            <div class="card-body">
                <h2 class="card-title">{"Prediction Results"}</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                    { for items }
                </div>
                <div class="mt-6 p-4 rounded bg-info/10 border-l-4 border-info">
                    <h3 class="font-semibold text-info mb-2">{"Summary"}</h3>
                    <p>
                        {"The model predicts weekly sales of "}
                        <strong>{&prediction.predicted_sales}</strong>
                        {format!(" for {} on {}. ", prediction.store_department, prediction.date)}
                        {"The confidence interval suggests sales could range from "}
                        <strong>{&prediction.confidence_low}</strong>
                        {" to "}
                        <strong>{&prediction.confidence_high}</strong>
                        {"."}
                    </p>
                </div>
            </div>
        </div>
    }
}
