//! Loading indicator.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading...".to_string())]
    pub label: String,
}

#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "padding: 8px 0; font-size: 12px; color: #666;",
            "{props.label}"
        }
    }
}
