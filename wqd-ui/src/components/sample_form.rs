//! New sample form.
//!
//! Inputs edit the raw `SampleForm` text; nothing is parsed until submit, when
//! the store converts the form and either issues the create request or shows
//! the conversion error.

use crate::state::{AppState, Services};
use dioxus::prelude::*;
use wqd_samples::{FormField, Scenario};
use wqd_store::Action;

const INPUT_STYLE: &str =
    "margin-top: 4px; width: 100%; box-sizing: border-box; padding: 8px; border: 1px solid #ccc; border-radius: 4px;";
const SIDE_BUTTON_STYLE: &str =
    "margin-top: 4px; padding: 8px 12px; background: #F1F5F9; border: none; border-radius: 4px; cursor: pointer; white-space: nowrap;";

/// The "New sample" form with its submit button.
#[component]
pub fn SampleFormSection() -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();
    let mut form = state.form;
    let scenario = form.read().scenario;
    let submitting = state.store.read().is_submitting();

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        state.dispatch(&services, Action::SubmitRequested(form()));
    };

    let on_scenario = move |evt: Event<FormData>| {
        if let Ok(scenario) = evt.value().parse::<Scenario>() {
            form.write().scenario = scenario;
        }
    };

    rsx! {
        form {
            onsubmit: on_submit,
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                div {
                    label {
                        style: "display: block; font-size: 14px; font-weight: 500;",
                        "Scenario"
                    }
                    select {
                        style: "{INPUT_STYLE}",
                        onchange: on_scenario,
                        for option_scenario in Scenario::ALL {
                            option {
                                value: "{option_scenario}",
                                selected: option_scenario == scenario,
                                "{option_scenario.label()}"
                            }
                        }
                    }
                }
                for field in FormField::ALL {
                    FormInput { key: "{field:?}", field }
                }
            }
            div {
                style: "display: flex; justify-content: flex-end; margin-top: 12px;",
                button {
                    r#type: "submit",
                    disabled: submitting,
                    style: "background: #2563EB; color: white; padding: 8px 16px; border: none; border-radius: 4px; cursor: pointer;",
                    if submitting { "Saving..." } else { "Save sample" }
                }
            }
        }
    }
}

/// One labelled form input. Latitude carries the "Use GPS" action and the
/// collection time the "Now" action.
#[component]
fn FormInput(field: FormField) -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();
    let mut form = state.form;
    let value = form.read().get(field).to_string();

    let on_input = move |evt: Event<FormData>| {
        form.write().set(field, evt.value());
    };

    let clock = services.clock.clone();
    let on_now = move |_: Event<MouseData>| {
        form.write().stamp_now(clock.as_ref());
    };

    let geolocator = services.geolocator.clone();
    let on_gps = move |_: Event<MouseData>| {
        let geolocator = geolocator.clone();
        spawn(async move {
            if let Some(location) = geolocator.locate().await {
                form.write().apply_location(location);
            }
        });
    };

    let wide = if field.is_multiline() {
        "grid-column: span 2;"
    } else {
        ""
    };
    let placeholder = if field == FormField::Metals {
        r#"{"Pb": 0.01, "Hg": 0.001}"#
    } else {
        ""
    };

    rsx! {
        div {
            style: "{wide}",
            label {
                style: "display: block; font-size: 14px; font-weight: 500;",
                "{field.label()}"
            }
            if field.is_multiline() {
                textarea {
                    rows: "2",
                    style: "{INPUT_STYLE}",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: on_input,
                }
            } else {
                div {
                    style: "display: flex; gap: 8px;",
                    input {
                        r#type: if field.is_measurement() { "number" } else { "text" },
                        step: if field.is_measurement() { "0.01" } else { "any" },
                        style: "{INPUT_STYLE}",
                        value: "{value}",
                        oninput: on_input,
                    }
                    if field == FormField::Latitude {
                        button {
                            r#type: "button",
                            style: "{SIDE_BUTTON_STYLE}",
                            onclick: on_gps,
                            "Use GPS"
                        }
                    }
                    if field == FormField::CollectedAt {
                        button {
                            r#type: "button",
                            style: "{SIDE_BUTTON_STYLE}",
                            onclick: on_now,
                            "Now"
                        }
                    }
                }
            }
        }
    }
}
