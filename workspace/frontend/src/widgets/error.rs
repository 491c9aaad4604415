use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Error card shown in place of prediction results.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="alert alert-error">
                    <i class="fas fa-exclamation-circle text-2xl"></i>
                    <span><strong>{"Error: "}</strong>{&props.message}</span>
                </div>
            </div>
        </div>
    }
}
