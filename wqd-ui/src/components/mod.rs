//! Dioxus RSX components for the water quality dashboard.

mod cluster_panel;
mod error_display;
mod loading_spinner;
mod sample_form;
mod samples_table;
mod scenario_filter;
mod section_header;
mod summary_cards;

pub use cluster_panel::ClusterPanel;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use sample_form::SampleFormSection;
pub use samples_table::SamplesTable;
pub use scenario_filter::ScenarioFilter;
pub use section_header::SectionHeader;
pub use summary_cards::SummaryCards;
