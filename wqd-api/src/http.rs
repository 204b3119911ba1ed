use crate::config::BackendConfig;
use crate::error::{detail_from_body, ApiError};
use crate::Backend;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use wqd_samples::{
    ClusterRequest, ClusterResult, NewSample, Sample, SampleList, Scenario, ScenarioSummary,
};

/// [`Backend`] over HTTP/JSON.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// `GET /samples` URL, with `?scenario=` only when filtering.
    pub fn samples_url(&self, scenario: Option<Scenario>) -> Result<Url, ApiError> {
        let mut url = self.config.endpoint("samples")?;
        if let Some(scenario) = scenario {
            url.query_pairs_mut()
                .append_pair("scenario", scenario.as_str());
        }
        Ok(url)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let detail = detail_from_body(&body);
            log::warn!(
                "Backend returned {}: {}",
                status,
                detail.as_deref().unwrap_or("<no detail>")
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail,
            });
        }
        serde_json::from_str(&body).map_err(|e| {
            log::error!("Failed to decode backend response: {}", e);
            ApiError::Decode(e)
        })
    }
}

impl Backend for HttpBackend {
    async fn create_sample(&self, sample: &NewSample) -> Result<Sample, ApiError> {
        let url = self.config.endpoint("samples")?;
        log::info!("POST {}", url);
        let response = self.client.post(url).json(sample).send().await?;
        Self::decode(response).await
    }

    async fn list_samples(&self, scenario: Option<Scenario>) -> Result<SampleList, ApiError> {
        let url = self.samples_url(scenario)?;
        log::info!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let list: SampleList = Self::decode(response).await?;
        log::info!("Listed {} samples", list.items.len());
        Ok(list)
    }

    async fn summaries(&self) -> Result<Vec<ScenarioSummary>, ApiError> {
        let url = self.config.endpoint("summaries")?;
        log::info!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Self::decode(response).await
    }

    async fn cluster(&self, request: &ClusterRequest) -> Result<ClusterResult, ApiError> {
        let url = self.config.endpoint("cluster")?;
        log::info!("POST {} (scenario={:?}, k={})", url, request.scenario, request.k);
        let response = self.client.post(url).json(request).send().await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_url_filter() {
        let backend = HttpBackend::new(BackendConfig::new("http://localhost:8000").unwrap());
        assert_eq!(
            backend.samples_url(None).unwrap().as_str(),
            "http://localhost:8000/samples"
        );
        assert_eq!(
            backend.samples_url(Some(Scenario::Monsoon)).unwrap().as_str(),
            "http://localhost:8000/samples?scenario=monsoon"
        );
    }
}
