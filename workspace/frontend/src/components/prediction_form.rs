use common::form::PredictionField;
use common::PredictionRequest;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PredictionFormProps {
    pub on_predict: Callback<PredictionRequest>,
    pub loading: bool,
}

/// The seven prediction inputs. Range limits are left to the native widgets.
#[function_component(PredictionForm)]
pub fn prediction_form(props: &PredictionFormProps) -> Html {
    let request = use_state(PredictionRequest::default);

    let on_change = {
        let request = request.clone();
        Callback::from(move |(field, input): (PredictionField, HtmlInputElement)| {
            let raw = input.value();
            let mut next = (*request).clone();
            match next.apply_input(field, &raw) {
                Ok(()) => {
                    log::trace!("{} set to {}", field.name(), raw);
                    request.set(next);
                }
                Err(rejected) => {
                    // Yew won't patch an unchanged vnode value, so reset the element directly
                    log::warn!("Ignoring input: {}", rejected.error);
                    input.set_value(&rejected.restore);
                }
            }
        })
    };

    let on_submit = {
        let request = request.clone();
        let on_predict = props.on_predict.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::debug!("Submitting prediction form: {:?}", *request);
            on_predict.emit((*request).clone());
        })
    };

    let inputs = PredictionField::ALL.iter().map(|&field| {
        let onchange = on_change.reform(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            (field, input)
        });
        html! {
            <div class="form-control" key={field.name()}>
                <label class="label" for={field.name()}>
                    <span class="label-text">{field.label()}</span>
                </label>
                <input
                    type={field.input_type()}
                    id={field.name()}
                    name={field.name()}
                    class="input input-bordered w-full"
                    value={request.field_value(field)}
                    min={field.min()}
                    max={field.max()}
                    step={field.step()}
                    required={field.required()}
                    {onchange}
                />
            </div>
        }
    });

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Sales Prediction"}</h2>
                <form onsubmit={on_submit} class="space-y-4">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        { for inputs }
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={props.loading}>
                        {if props.loading {
                            html! {
                                <>
                                    <span class="loading loading-spinner loading-sm"></span>
                                    {" Predicting..."}
                                </>
                            }
                        } else {
                            html! { {"Get Prediction"} }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
