//! Clustering trigger and result display.

use crate::state::{AppState, Services};
use dioxus::prelude::*;
use wqd_store::Action;

/// "Run clustering" button plus the pretty-printed result of the last run.
/// The button is disabled while a run is in flight.
#[component]
pub fn ClusterPanel() -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();
    let (result, in_flight) = {
        let store = state.store.read();
        (
            store.cluster.result.as_ref().map(|r| r.pretty()),
            store.cluster.in_flight,
        )
    };

    let on_run = move |_: Event<MouseData>| {
        state.dispatch(&services, Action::ClusterRequested);
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; margin-top: 16px;",
            div {
                button {
                    r#type: "button",
                    disabled: in_flight,
                    style: "background: #059669; color: white; padding: 8px 12px; border: none; border-radius: 4px; cursor: pointer;",
                    onclick: on_run,
                    if in_flight { "Clustering..." } else { "Run clustering" }
                }
            }
            if let Some(text) = result {
                pre {
                    style: "font-size: 12px; background: #0F172A; color: #F1F5F9; padding: 12px; border-radius: 4px; overflow: auto;",
                    "{text}"
                }
            }
        }
    }
}
