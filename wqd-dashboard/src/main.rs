//! Water Quality Dashboard
//!
//! Single-page app for capturing water quality field samples, viewing
//! per-scenario summaries and running a clustering pass on the backend.
//!
//! Data flow:
//! 1. The backend base URL comes from `WQD_BACKEND_URL` at build time
//!    (default `http://localhost:8000`).
//! 2. On mount the store requests the sample listing and the summaries.
//! 3. Changing the scenario filter re-fetches the listing for that scenario.
//! 4. Saving a sample publishes a refresh; the listing and the summaries each
//!    re-fetch once.
//! 5. "Run clustering" posts the current filter with `k = 3` and shows the
//!    returned JSON verbatim.

use dioxus::prelude::*;
use wqd_api::BackendConfig;
use wqd_store::Action;
use wqd_ui::components::{
    ClusterPanel, ErrorDisplay, SampleFormSection, SamplesTable, ScenarioFilter, SectionHeader,
    SummaryCards,
};
use wqd_ui::state::{AppState, Services};

const SECTION_STYLE: &str =
    "background: white; border-radius: 12px; box-shadow: 0 1px 3px rgba(0,0,0,0.12); padding: 20px;";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("water-quality-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| BackendConfig::from_build_env().map_err(|e| e.to_string()));

    match config {
        Ok(config) => rsx! {
            Dashboard { config }
        },
        Err(message) => {
            log::error!("Backend misconfigured: {}", message);
            rsx! {
                div {
                    style: "padding: 16px; font-family: system-ui, -apple-system, sans-serif;",
                    ErrorDisplay { message }
                }
            }
        }
    }
}

#[component]
fn Dashboard(config: BackendConfig) -> Element {
    let state = use_context_provider(AppState::new);
    let services = use_context_provider(|| Services::browser(config));

    // Initial load of the listing and summaries
    use_effect(move || {
        state.dispatch(&services, Action::Mounted);
    });

    rsx! {
        div {
            style: "min-height: 100vh; background: linear-gradient(135deg, #F0F9FF, #EEF2FF); font-family: system-ui, -apple-system, sans-serif;",
            div {
                style: "max-width: 1152px; margin: 0 auto; padding: 32px 16px; display: flex; flex-direction: column; gap: 32px;",

                header {
                    style: "display: flex; align-items: center; justify-content: space-between;",
                    div {
                        h1 {
                            style: "margin: 0; font-size: 24px; font-weight: 700; color: #1E293B;",
                            "Water Quality Dashboard"
                        }
                        p {
                            style: "margin: 4px 0 0 0; color: #475569;",
                            "Capture samples, view summaries, and run clustering across scenarios."
                        }
                    }
                    ScenarioFilter {}
                }

                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 32px;",
                    section {
                        style: SECTION_STYLE,
                        SectionHeader { title: "New sample".to_string() }
                        SampleFormSection {}
                    }
                    section {
                        style: SECTION_STYLE,
                        SectionHeader {
                            title: "Scenario summaries".to_string(),
                            description: "Backend averages per scenario; clustering uses the filter above.".to_string(),
                        }
                        SummaryCards {}
                        ClusterPanel {}
                    }
                }

                section {
                    style: SECTION_STYLE,
                    SectionHeader { title: "Samples".to_string() }
                    SamplesTable {}
                }
            }
        }
    }
}
