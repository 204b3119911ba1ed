//! Performing request effects against a [`Backend`].

use crate::store::{Action, Effect};
use wqd_api::Backend;

/// Run one request effect and return the action that completes it.
///
/// `Effect::Notify` is not a request; it yields `None` and is left to the
/// caller's [`Notifier`](crate::capabilities::Notifier).
pub async fn execute<B: Backend>(backend: &B, effect: Effect) -> Option<Action> {
    let action = match effect {
        Effect::CreateSample(sample) => Action::SubmitFinished(
            backend
                .create_sample(&sample)
                .await
                .map_err(|e| e.user_message()),
        ),
        Effect::FetchSamples { ticket, scenario } => Action::SamplesLoaded {
            ticket,
            result: backend
                .list_samples(scenario)
                .await
                .map_err(|e| e.user_message()),
        },
        Effect::FetchSummaries { ticket } => Action::SummariesLoaded {
            ticket,
            result: backend.summaries().await.map_err(|e| e.user_message()),
        },
        Effect::RunCluster(request) => Action::ClusterFinished(
            backend
                .cluster(&request)
                .await
                .map_err(|e| e.user_message()),
        ),
        Effect::Notify(_) => return None,
    };
    Some(action)
}
