//! Table of listed samples.

use super::{ErrorDisplay, LoadingSpinner};
use crate::state::AppState;
use dioxus::prelude::*;
use wqd_samples::display::COLUMNS;
use wqd_samples::SampleRow;

const CELL_STYLE: &str = "padding: 4px 12px; text-align: left;";

/// One row per sample of the current filter, keyed by backend id.
#[component]
pub fn SamplesTable() -> Element {
    let state = use_context::<AppState>();
    let (rows, error, loading) = {
        let store = state.store.read();
        let rows: Vec<SampleRow> = store.samples.items.iter().map(SampleRow::local).collect();
        (rows, store.samples.error.clone(), store.samples.is_loading())
    };

    rsx! {
        if let Some(message) = error {
            ErrorDisplay { message, context: "samples".to_string() }
        }
        if loading && rows.is_empty() {
            LoadingSpinner { label: "Loading samples...".to_string() }
        }
        div {
            style: "overflow: auto; border: 1px solid #E0E0E0; border-radius: 4px;",
            table {
                style: "min-width: 100%; font-size: 14px; border-collapse: collapse;",
                thead {
                    style: "background: #F8FAFC;",
                    tr {
                        for column in COLUMNS {
                            th { style: "padding: 8px 12px; text-align: left;", "{column}" }
                        }
                    }
                }
                tbody {
                    for row in rows {
                        tr {
                            key: "{row.key}",
                            style: "border-top: 1px solid #E0E0E0;",
                            td { style: CELL_STYLE, "{row.scenario}" }
                            td { style: CELL_STYLE, "{row.site}" }
                            td { style: CELL_STYLE, "{row.time}" }
                            td { style: CELL_STYLE, "{row.lat}" }
                            td { style: CELL_STYLE, "{row.lon}" }
                            td { style: CELL_STYLE, "{row.ph}" }
                            td { style: CELL_STYLE, "{row.dissolved_oxygen}" }
                            td { style: CELL_STYLE, "{row.turbidity}" }
                        }
                    }
                }
            }
        }
    }
}
