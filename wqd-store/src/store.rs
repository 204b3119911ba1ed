//! Dashboard state and its transitions.
//!
//! [`DashboardStore::dispatch`] is the only way state changes. It applies an
//! [`Action`] and returns the [`Effect`]s the caller must perform (requests and
//! user notifications). Request effects carry a [`Ticket`]; a completion whose
//! ticket is no longer the view's pending one is dropped, so superseded or
//! abandoned requests never overwrite newer data.

use wqd_samples::{
    ClusterRequest, ClusterResult, NewSample, Sample, SampleForm, SampleList, Scenario,
    ScenarioSummary,
};

/// Confirmation shown after a sample is stored.
pub const SAVED_MESSAGE: &str = "Sample saved";

/// Identity of one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// First render: load every view.
    Mounted,
    /// The scenario filter select changed.
    FilterChanged(Option<Scenario>),
    /// Refresh event: every view re-fetches once.
    Refresh,
    /// The user pressed "Save sample".
    SubmitRequested(SampleForm),
    SubmitFinished(Result<Sample, String>),
    SamplesLoaded {
        ticket: Ticket,
        result: Result<SampleList, String>,
    },
    SummariesLoaded {
        ticket: Ticket,
        result: Result<Vec<ScenarioSummary>, String>,
    },
    /// The user pressed "Run clustering".
    ClusterRequested,
    ClusterFinished(Result<ClusterResult, String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    CreateSample(NewSample),
    FetchSamples {
        ticket: Ticket,
        scenario: Option<Scenario>,
    },
    FetchSummaries {
        ticket: Ticket,
    },
    RunCluster(ClusterRequest),
    /// Blocking message for the user.
    Notify(String),
}

/// Sample table state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SamplesView {
    pub items: Vec<Sample>,
    pub count: u64,
    pub error: Option<String>,
    pending: Option<Ticket>,
}

impl SamplesView {
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }
}

/// Summary cards state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummariesView {
    pub items: Vec<ScenarioSummary>,
    pub error: Option<String>,
    pending: Option<Ticket>,
}

impl SummariesView {
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }
}

/// Clustering panel state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterView {
    pub result: Option<ClusterResult>,
    pub in_flight: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStore {
    filter: Option<Scenario>,
    submitting: bool,
    next_ticket: u64,
    pub samples: SamplesView,
    pub summaries: SummariesView,
    pub cluster: ClusterView,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scenario the listing and clustering are restricted to (`None` = all).
    pub fn filter(&self) -> Option<Scenario> {
        self.filter
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }

    fn fetch_samples(&mut self) -> Effect {
        let ticket = self.issue_ticket();
        self.samples.pending = Some(ticket);
        Effect::FetchSamples {
            ticket,
            scenario: self.filter,
        }
    }

    fn fetch_summaries(&mut self) -> Effect {
        let ticket = self.issue_ticket();
        self.summaries.pending = Some(ticket);
        Effect::FetchSummaries { ticket }
    }

    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Mounted | Action::Refresh => {
                vec![self.fetch_samples(), self.fetch_summaries()]
            }
            Action::FilterChanged(filter) => {
                if filter == self.filter {
                    return Vec::new();
                }
                self.filter = filter;
                // Rows of the previous filter must not linger.
                self.samples.items.clear();
                self.samples.count = 0;
                self.samples.error = None;
                vec![self.fetch_samples()]
            }
            Action::SubmitRequested(form) => {
                if self.submitting {
                    log::warn!("Ignoring submit while a sample is being saved");
                    return Vec::new();
                }
                match form.to_new_sample() {
                    Ok(sample) => {
                        self.submitting = true;
                        vec![Effect::CreateSample(sample)]
                    }
                    Err(e) => vec![Effect::Notify(e.to_string())],
                }
            }
            Action::SubmitFinished(result) => {
                self.submitting = false;
                match result {
                    Ok(sample) => {
                        log::info!("Sample {} saved", sample.id);
                        let mut effects = self.dispatch(Action::Refresh);
                        effects.push(Effect::Notify(SAVED_MESSAGE.to_string()));
                        effects
                    }
                    Err(message) => vec![Effect::Notify(message)],
                }
            }
            Action::SamplesLoaded { ticket, result } => {
                if self.samples.pending != Some(ticket) {
                    log::info!("Dropping stale sample listing {:?}", ticket);
                    return Vec::new();
                }
                self.samples.pending = None;
                match result {
                    Ok(list) => {
                        self.samples.items = list.items;
                        self.samples.count = list.count;
                        self.samples.error = None;
                    }
                    Err(message) => {
                        self.samples.items.clear();
                        self.samples.count = 0;
                        self.samples.error = Some(message);
                    }
                }
                Vec::new()
            }
            Action::SummariesLoaded { ticket, result } => {
                if self.summaries.pending != Some(ticket) {
                    log::info!("Dropping stale summaries {:?}", ticket);
                    return Vec::new();
                }
                self.summaries.pending = None;
                match result {
                    Ok(items) => {
                        self.summaries.items = items;
                        self.summaries.error = None;
                    }
                    Err(message) => {
                        self.summaries.items.clear();
                        self.summaries.error = Some(message);
                    }
                }
                Vec::new()
            }
            Action::ClusterRequested => {
                if self.cluster.in_flight {
                    return Vec::new();
                }
                self.cluster.in_flight = true;
                vec![Effect::RunCluster(ClusterRequest::new(self.filter))]
            }
            Action::ClusterFinished(result) => {
                self.cluster.in_flight = false;
                match result {
                    Ok(result) => {
                        self.cluster.result = Some(result);
                        Vec::new()
                    }
                    Err(message) => vec![Effect::Notify(message)],
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use wqd_samples::{Location, SampleId};

    fn sample(id: i64, scenario: Scenario) -> Sample {
        Sample {
            id: SampleId::Number(id),
            sample: NewSample {
                scenario,
                site_name: None,
                collected_at: Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap(),
                location: Location { lat: 1.0, lon: 2.0 },
                ph: None,
                dissolved_oxygen_mg_l: None,
                turbidity_ntu: None,
                metals_mg_l: None,
                notes: None,
                files: None,
            },
        }
    }

    fn list(items: Vec<Sample>) -> SampleList {
        let count = items.len() as u64;
        SampleList { items, count }
    }

    fn samples_ticket(effects: &[Effect]) -> (Ticket, Option<Scenario>) {
        effects
            .iter()
            .find_map(|e| match e {
                Effect::FetchSamples { ticket, scenario } => Some((*ticket, *scenario)),
                _ => None,
            })
            .expect("a sample fetch")
    }

    fn valid_form() -> SampleForm {
        SampleForm {
            collected_at: "2024-05-01T08:30:00Z".to_string(),
            lat: "1".to_string(),
            lon: "2".to_string(),
            ..SampleForm::default()
        }
    }

    #[test]
    fn test_mount_fetches_both_views() {
        let mut store = DashboardStore::new();
        let effects = store.dispatch(Action::Mounted);
        assert_eq!(effects.len(), 2);
        assert_eq!(samples_ticket(&effects).1, None);
        assert!(matches!(effects[1], Effect::FetchSummaries { .. }));
        assert!(store.samples.is_loading());
        assert!(store.summaries.is_loading());
    }

    #[test]
    fn test_filter_change_drops_old_rows_and_refetches() {
        let mut store = DashboardStore::new();
        let (ticket, _) = samples_ticket(&store.dispatch(Action::Mounted));
        store.dispatch(Action::SamplesLoaded {
            ticket,
            result: Ok(list(vec![sample(1, Scenario::Dry), sample(2, Scenario::Monsoon)])),
        });
        assert_eq!(store.samples.items.len(), 2);

        let effects = store.dispatch(Action::FilterChanged(Some(Scenario::Monsoon)));
        let (ticket, scenario) = samples_ticket(&effects);
        assert_eq!(effects.len(), 1);
        assert_eq!(scenario, Some(Scenario::Monsoon));
        assert!(store.samples.items.is_empty());

        store.dispatch(Action::SamplesLoaded {
            ticket,
            result: Ok(list(vec![sample(2, Scenario::Monsoon)])),
        });
        assert_eq!(store.samples.items.len(), 1);
        assert!(store
            .samples
            .items
            .iter()
            .all(|s| s.sample.scenario == Scenario::Monsoon));
    }

    #[test]
    fn test_same_filter_is_a_no_op() {
        let mut store = DashboardStore::new();
        assert!(store.dispatch(Action::FilterChanged(None)).is_empty());
    }

    #[test]
    fn test_stale_listing_is_ignored() {
        let mut store = DashboardStore::new();
        let (old, _) = samples_ticket(&store.dispatch(Action::FilterChanged(Some(Scenario::Dry))));
        let (new, _) =
            samples_ticket(&store.dispatch(Action::FilterChanged(Some(Scenario::Industrial))));

        store.dispatch(Action::SamplesLoaded {
            ticket: new,
            result: Ok(list(vec![sample(3, Scenario::Industrial)])),
        });
        // The slower, superseded response arrives last.
        store.dispatch(Action::SamplesLoaded {
            ticket: old,
            result: Ok(list(vec![sample(1, Scenario::Dry)])),
        });

        assert_eq!(store.samples.items.len(), 1);
        assert_eq!(store.samples.items[0].sample.scenario, Scenario::Industrial);
        assert!(!store.samples.is_loading());
    }

    #[test]
    fn test_successful_submit_refreshes_each_view_once() {
        let mut store = DashboardStore::new();
        let effects = store.dispatch(Action::SubmitRequested(valid_form()));
        assert!(matches!(effects.as_slice(), [Effect::CreateSample(_)]));
        assert!(store.is_submitting());

        let effects = store.dispatch(Action::SubmitFinished(Ok(sample(9, Scenario::Dry))));
        let fetch_samples = effects
            .iter()
            .filter(|e| matches!(e, Effect::FetchSamples { .. }))
            .count();
        let fetch_summaries = effects
            .iter()
            .filter(|e| matches!(e, Effect::FetchSummaries { .. }))
            .count();
        assert_eq!(fetch_samples, 1);
        assert_eq!(fetch_summaries, 1);
        assert_eq!(
            effects.last(),
            Some(&Effect::Notify(SAVED_MESSAGE.to_string()))
        );
        assert!(!store.is_submitting());
    }

    #[test]
    fn test_invalid_form_notifies_without_request() {
        let mut store = DashboardStore::new();
        let form = SampleForm {
            collected_at: String::new(),
            ..valid_form()
        };
        let effects = store.dispatch(Action::SubmitRequested(form));
        assert!(matches!(effects.as_slice(), [Effect::Notify(m)] if m.starts_with("Invalid time value")));
        assert!(!store.is_submitting());
    }

    #[test]
    fn test_failed_submit_notifies_detail_and_does_not_refresh() {
        let mut store = DashboardStore::new();
        store.dispatch(Action::SubmitRequested(valid_form()));
        let effects = store.dispatch(Action::SubmitFinished(Err("ph out of range".to_string())));
        assert_eq!(effects, vec![Effect::Notify("ph out of range".to_string())]);
    }

    #[test]
    fn test_submit_blocked_while_saving() {
        let mut store = DashboardStore::new();
        let effects = store.dispatch(Action::SubmitRequested(valid_form()));
        assert_eq!(effects.len(), 1);

        assert!(store
            .dispatch(Action::SubmitRequested(valid_form()))
            .is_empty());
        assert!(store.is_submitting());

        store.dispatch(Action::SubmitFinished(Err("Failed".to_string())));
        assert!(!store.is_submitting());
        let effects = store.dispatch(Action::SubmitRequested(valid_form()));
        assert!(matches!(effects.as_slice(), [Effect::CreateSample(_)]));
    }

    #[test]
    fn test_cluster_uses_filter_and_blocks_double_click() {
        let mut store = DashboardStore::new();
        store.dispatch(Action::FilterChanged(Some(Scenario::Upstream)));

        let effects = store.dispatch(Action::ClusterRequested);
        assert_eq!(
            effects,
            vec![Effect::RunCluster(ClusterRequest {
                scenario: Some(Scenario::Upstream),
                k: 3
            })]
        );
        assert!(store.dispatch(Action::ClusterRequested).is_empty());

        let result = ClusterResult(json!({"clusters": [[1, 2]]}));
        store.dispatch(Action::ClusterFinished(Ok(result.clone())));
        assert_eq!(store.cluster.result, Some(result));
        assert!(!store.cluster.in_flight);
    }

    #[test]
    fn test_summary_error_is_kept_on_view() {
        let mut store = DashboardStore::new();
        let effects = store.dispatch(Action::Mounted);
        let ticket = effects
            .iter()
            .find_map(|e| match e {
                Effect::FetchSummaries { ticket } => Some(*ticket),
                _ => None,
            })
            .unwrap();
        store.dispatch(Action::SummariesLoaded {
            ticket,
            result: Err("HTTP request failed".to_string()),
        });
        assert_eq!(store.summaries.error.as_deref(), Some("HTTP request failed"));
        assert!(store.summaries.items.is_empty());
    }
}
