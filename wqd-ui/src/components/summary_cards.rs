//! Per-scenario summary cards.

use super::{ErrorDisplay, LoadingSpinner};
use crate::state::AppState;
use dioxus::prelude::*;
use wqd_samples::SummaryCard;

/// One card per scenario returned by the backend.
#[component]
pub fn SummaryCards() -> Element {
    let state = use_context::<AppState>();
    let (cards, error, loading) = {
        let store = state.store.read();
        let cards: Vec<SummaryCard> = store.summaries.items.iter().map(SummaryCard::from).collect();
        (cards, store.summaries.error.clone(), store.summaries.is_loading())
    };

    rsx! {
        if let Some(message) = error {
            ErrorDisplay { message, context: "summaries".to_string() }
        }
        if loading && cards.is_empty() {
            LoadingSpinner { label: "Loading summaries...".to_string() }
        }
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(160px, 1fr)); gap: 12px;",
            for card in cards {
                div {
                    key: "{card.scenario}",
                    style: "border: 1px solid #E0E0E0; border-radius: 4px; padding: 12px;",
                    div { style: "font-weight: 600;", "{card.scenario}" }
                    div { style: "font-size: 12px; color: #64748B;", "{card.count}" }
                    div { style: "margin-top: 8px; font-size: 14px;", "{card.avg_ph}" }
                    div { style: "font-size: 14px;", "{card.avg_do}" }
                    div { style: "font-size: 14px;", "{card.avg_turbidity}" }
                }
            }
        }
    }
}
