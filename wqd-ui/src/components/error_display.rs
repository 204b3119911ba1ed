//! Inline error display for a view whose data could not be loaded.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// What failed to load, e.g. "samples"
    #[props(default = String::new())]
    pub context: String,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            if props.context.is_empty() {
                strong { "Error: " }
            } else {
                strong { "Could not load {props.context}: " }
            }
            "{props.message}"
        }
    }
}
