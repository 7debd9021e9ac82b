use gloo_timers::future::TimeoutFuture;
use log::{debug, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::utils::lead_form::FormState;
use crate::utils::validation::{Field, LicenseType};

#[derive(Properties, PartialEq)]
pub struct ValuationFormProps {
    pub ack_display_ms: u32,
}

fn field_error(state: &FormState, field: Field) -> Html {
    match state.error(field) {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}

fn input_classes(state: &FormState, field: Field) -> Classes {
    classes!("form-input", state.error(field).map(|_| "has-error"))
}

#[function_component(ValuationForm)]
pub fn valuation_form(props: &ValuationFormProps) -> Html {
    let form = use_state(FormState::default);
    let submitted = use_state(|| false);

    let on_text = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.edit(field, input.value());
            form.set(next);
        })
    };

    let on_license = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.edit(Field::LicenseType, select.value());
            form.set(next);
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.edit(Field::Message, area.value());
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submitted = submitted.clone();
        let ack_display_ms = props.ack_display_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            match next.try_submit() {
                Some(lead) => {
                    // Nothing leaves the browser, the log is the only sink
                    match serde_json::to_string(&lead) {
                        Ok(json) => info!("Form submitted: {}", json),
                        Err(e) => warn!("Form submitted but could not be serialized: {}", e),
                    }
                    submitted.set(true);
                    let submitted = submitted.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(ack_display_ms).await;
                        submitted.set(false);
                    });
                }
                None => debug!("Valuation form rejected with {} errors", next.errors.len()),
            }
            form.set(next);
        })
    };

    if *submitted {
        return html! {
            <div class="form-thanks">
                <div class="form-thanks-badge">
                    <i class="fas fa-check"></i>
                </div>
                <h3>{"Thank You!"}</h3>
                <p>{"We've received your information and will contact you within 24 hours with a valuation."}</p>
            </div>
        };
    }

    let state = &*form;
    html! {
        <form class="valuation-form" onsubmit={onsubmit}>
            <div class="form-grid">
                <div class="form-field">
                    <label for={Field::Name.as_str()}>{"Full Name *"}</label>
                    <input
                        type="text"
                        id={Field::Name.as_str()}
                        name={Field::Name.as_str()}
                        class={input_classes(state, Field::Name)}
                        value={state.fields.name.clone()}
                        oninput={on_text(Field::Name)}
                        placeholder="Anirudhhan Ashok"
                    />
                    {field_error(state, Field::Name)}
                </div>
                <div class="form-field">
                    <label for={Field::Email.as_str()}>{"Email Address *"}</label>
                    <input
                        type="email"
                        id={Field::Email.as_str()}
                        name={Field::Email.as_str()}
                        class={input_classes(state, Field::Email)}
                        value={state.fields.email.clone()}
                        oninput={on_text(Field::Email)}
                        placeholder="anirudhhan@company.com"
                    />
                    {field_error(state, Field::Email)}
                </div>
            </div>

            <div class="form-grid">
                <div class="form-field">
                    <label for={Field::Company.as_str()}>{"Company Name *"}</label>
                    <input
                        type="text"
                        id={Field::Company.as_str()}
                        name={Field::Company.as_str()}
                        class={input_classes(state, Field::Company)}
                        value={state.fields.company.clone()}
                        oninput={on_text(Field::Company)}
                        placeholder="Acme Inc."
                    />
                    {field_error(state, Field::Company)}
                </div>
                <div class="form-field">
                    <label for={Field::LicenseType.as_str()}>{"License Type *"}</label>
                    <select
                        id={Field::LicenseType.as_str()}
                        name={Field::LicenseType.as_str()}
                        class={input_classes(state, Field::LicenseType)}
                        onchange={on_license}
                    >
                        <option value="" selected={state.fields.license_type.is_empty()}>
                            {"Select License Type"}
                        </option>
                        { for LicenseType::ALL.iter().map(|license| html! {
                            <option
                                value={license.value()}
                                selected={state.fields.license_type == license.value()}
                            >
                                {license.label()}
                            </option>
                        })}
                    </select>
                    {field_error(state, Field::LicenseType)}
                </div>
            </div>

            <div class="form-field">
                <label for={Field::Message.as_str()}>{"Additional Details"}</label>
                <textarea
                    id={Field::Message.as_str()}
                    name={Field::Message.as_str()}
                    rows="4"
                    class="form-input"
                    value={state.fields.message.clone()}
                    oninput={on_message}
                    placeholder="Tell us about your software licenses (quantity, version, purchase date, etc.)"
                />
            </div>

            <button type="submit" class="btn btn-primary btn-block">{"Submit for Valuation"}</button>
        </form>
    }
}
