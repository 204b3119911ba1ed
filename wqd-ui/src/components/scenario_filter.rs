//! Dropdown selector for the dashboard-wide scenario filter.

use crate::state::{AppState, Services};
use dioxus::prelude::*;
use wqd_samples::Scenario;
use wqd_store::Action;

/// Scenario filter selector.
/// "All" maps to no filter; changing it re-fetches the sample listing.
#[component]
pub fn ScenarioFilter() -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();
    let selected = state.store.read().filter();

    let on_change = move |evt: Event<FormData>| match Scenario::parse_filter(&evt.value()) {
        Ok(filter) => state.dispatch(&services, Action::FilterChanged(filter)),
        Err(e) => log::warn!("{}", e),
    };

    rsx! {
        div {
            style: "display: flex; gap: 8px; align-items: center;",
            label {
                r#for: "scenario-filter",
                style: "font-size: 14px;",
                "Scenario filter:"
            }
            select {
                id: "scenario-filter",
                style: "padding: 6px; border: 1px solid #ccc; border-radius: 4px;",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_none(),
                    "All"
                }
                for scenario in Scenario::ALL {
                    option {
                        value: "{scenario}",
                        selected: selected == Some(scenario),
                        "{scenario.label()}"
                    }
                }
            }
        }
    }
}
