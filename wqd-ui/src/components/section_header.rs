//! Section header with title and optional description.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SectionHeaderProps {
    /// Section title
    pub title: String,
    #[props(default = String::new())]
    pub description: String,
}

/// Header for dashboard sections.
#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 12px;",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 18px; font-weight: 600;",
                "{props.title}"
            }
            if !props.description.is_empty() {
                p {
                    style: "margin: 0; font-size: 13px; color: #666;",
                    "{props.description}"
                }
            }
        }
    }
}
