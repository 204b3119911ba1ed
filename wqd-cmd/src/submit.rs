//! `submit` subcommand.

use anyhow::Context;
use log::info;
use wqd_api::Backend;
use wqd_samples::{Sample, SampleForm};

/// Convert the form and post it, printing the stored record as JSON.
///
/// Nothing is sent when the form does not convert.
pub async fn run_submit<B: Backend>(backend: &B, form: &SampleForm) -> anyhow::Result<Sample> {
    let sample = form.to_new_sample().context("Invalid sample")?;
    info!(
        "Submitting {} sample collected at {}",
        sample.scenario, sample.collected_at
    );

    let saved = backend.create_sample(&sample).await?;
    info!("Sample saved (id {})", saved.id);
    println!("{}", serde_json::to_string_pretty(&saved)?);
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use wqd_api::ApiError;
    use wqd_samples::{
        ClusterRequest, ClusterResult, NewSample, SampleId, SampleList, Scenario, ScenarioSummary,
    };

    /// Stores posted samples; everything else is unused by `submit`.
    #[derive(Default)]
    struct MemoryBackend {
        posted: RefCell<Vec<NewSample>>,
        reject: Option<String>,
    }

    impl Backend for MemoryBackend {
        async fn create_sample(&self, sample: &NewSample) -> Result<Sample, ApiError> {
            if let Some(detail) = &self.reject {
                return Err(ApiError::Status {
                    status: 422,
                    detail: Some(detail.clone()),
                });
            }
            self.posted.borrow_mut().push(sample.clone());
            Ok(Sample {
                id: SampleId::Text("s-1".to_string()),
                sample: sample.clone(),
            })
        }

        async fn list_samples(&self, _scenario: Option<Scenario>) -> Result<SampleList, ApiError> {
            Ok(SampleList::default())
        }

        async fn summaries(&self) -> Result<Vec<ScenarioSummary>, ApiError> {
            Ok(Vec::new())
        }

        async fn cluster(&self, _request: &ClusterRequest) -> Result<ClusterResult, ApiError> {
            Ok(ClusterResult(json!({})))
        }
    }

    fn form() -> SampleForm {
        SampleForm {
            scenario: Scenario::Monsoon,
            lat: "12.5".to_string(),
            lon: "-70.25".to_string(),
            collected_at: "2024-05-01T08:30:00Z".to_string(),
            ph: "7.1".to_string(),
            metals_mg_l: r#"{"Pb": 0.01, "As": null}"#.to_string(),
            ..SampleForm::default()
        }
    }

    #[tokio::test]
    async fn test_submit_posts_converted_form() {
        let backend = MemoryBackend::default();
        let saved = run_submit(&backend, &form()).await.unwrap();

        assert_eq!(saved.id.to_string(), "s-1");
        let posted = backend.posted.borrow();
        assert_eq!(posted.len(), 1);
        let payload = serde_json::to_value(&posted[0]).unwrap();
        assert_eq!(payload["scenario"], json!("monsoon"));
        assert_eq!(payload["ph"], json!(7.1));
        assert_eq!(payload["turbidity_ntu"], json!(null));
        assert_eq!(payload["metals_mg_l"], json!({"Pb": 0.01, "As": null}));
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let backend = MemoryBackend::default();
        let bad = SampleForm {
            lat: "north".to_string(),
            ..form()
        };
        let err = run_submit(&backend, &bad).await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid sample");
        assert!(backend.posted.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_rejection_carries_backend_detail() {
        let backend = MemoryBackend {
            reject: Some("ph out of range".to_string()),
            ..MemoryBackend::default()
        };
        let err = run_submit(&backend, &form()).await.unwrap_err();
        assert!(err.to_string().contains("ph out of range"));
    }
}
