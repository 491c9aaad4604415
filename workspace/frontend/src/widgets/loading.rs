use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingCardProps {
    pub message: AttrValue,
}

/// Card-sized placeholder shown while a view waits on the service.
#[function_component(LoadingCard)]
pub fn loading_card(props: &LoadingCardProps) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body items-center py-12 gap-4">
                <span class="loading loading-spinner loading-lg"></span>
                <p class="text-sm text-gray-500">{&props.message}</p>
            </div>
        </div>
    }
}
