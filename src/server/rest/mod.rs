//! Client for the external catalog REST API.
//!
//! Only dataset detail data that is not part of the search documents (features,
//! qualities, statistics) is fetched here. Responses are passed through as JSON.

use reqwest::StatusCode;
use serde_json::Value;

use crate::server::error::upstream::{Upstream, UpstreamError};

#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn dataset_features(&self, dataset_id: u64) -> Result<Value, UpstreamError> {
        self.get_json(&format!("/data/features/{}", dataset_id), || {
            format!("features for dataset {}", dataset_id)
        })
        .await
    }

    pub async fn dataset_qualities(&self, dataset_id: u64) -> Result<Value, UpstreamError> {
        self.get_json(&format!("/data/qualities/{}", dataset_id), || {
            format!("qualities for dataset {}", dataset_id)
        })
        .await
    }

    /// Column statistics computed by the external profiling engine.
    pub async fn dataset_statistics(&self, dataset_id: u64) -> Result<Value, UpstreamError> {
        self.get_json(&format!("/data/statistics/{}", dataset_id), || {
            format!("statistics for dataset {}", dataset_id)
        })
        .await
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json(
        &self,
        path: &str,
        what: impl FnOnce() -> String,
    ) -> Result<Value, UpstreamError> {
        let response = self
            .http
            .get(self.url(path))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| UpstreamError::from_reqwest(Upstream::RestApi, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound(Upstream::RestApi, what()));
        }
        if !status.is_success() {
            return Err(UpstreamError::BadStatus(Upstream::RestApi, status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| UpstreamError::from_reqwest(Upstream::RestApi, e))
    }
}
