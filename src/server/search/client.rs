//! HTTP access to the Elasticsearch cluster.
//!
//! Requests go through the shared `reqwest::Client` (timeout configured at startup, no
//! redirects). One `IndexConnector` per index name is created on first use and cached
//! for the lifetime of the process.

use dioxus_logger::tracing;
use reqwest::StatusCode;
use serde_json::Value;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

use crate::server::error::upstream::{Upstream, UpstreamError};

/// Basic auth credentials for the cluster.
#[derive(Clone, Debug)]
pub struct SearchCredentials {
    pub username: String,
    pub password: Option<String>,
}

/// Cheap to clone handle to the cluster and its connector cache.
#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Option<SearchCredentials>,
    connectors: Arc<RwLock<HashMap<String, Arc<IndexConnector>>>>,
}

/// Endpoints of one index.
#[derive(Debug)]
pub struct IndexConnector {
    pub index: String,
    search_url: String,
    count_url: String,
    doc_url: String,
}

impl SearchClient {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        credentials: Option<SearchCredentials>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            connectors: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the cached connector for `index`, creating it on first use.
    pub async fn connector(&self, index: &str) -> Arc<IndexConnector> {
        if let Some(connector) = self.connectors.read().await.get(index) {
            return connector.clone();
        }

        let mut connectors = self.connectors.write().await;

        // Another request may have created it between the two locks.
        connectors
            .entry(index.to_string())
            .or_insert_with(|| {
                tracing::debug!("Creating search connector for index {}", index);
                Arc::new(IndexConnector {
                    index: index.to_string(),
                    search_url: format!("{}/{}/_search", self.base_url, index),
                    count_url: format!("{}/{}/_count", self.base_url, index),
                    doc_url: format!("{}/{}/_doc", self.base_url, index),
                })
            })
            .clone()
    }

    /// Runs a `_search` request and returns the raw response body.
    pub async fn search(&self, index: &str, body: &Value) -> Result<Value, UpstreamError> {
        let connector = self.connector(index).await;
        self.post_json(&connector.search_url, body, &connector.index)
            .await
    }

    /// Runs a `_count` request and returns the raw response body.
    pub async fn count(&self, index: &str, body: &Value) -> Result<Value, UpstreamError> {
        let connector = self.connector(index).await;
        self.post_json(&connector.count_url, body, &connector.index)
            .await
    }

    /// Fetches one document; its `_source` is returned with `_id` under `id`.
    pub async fn get_document(&self, index: &str, id: &str) -> Result<Value, UpstreamError> {
        let connector = self.connector(index).await;
        let url = format!("{}/{}", connector.doc_url, id);

        let response = self
            .authorize(self.http.get(&url))
            .send()
            .await
            .map_err(|e| UpstreamError::from_reqwest(Upstream::Search, e))?;

        let body = Self::read_json(response, || format!("{} document {}", index, id)).await?;

        if body.get("found").and_then(Value::as_bool) == Some(false) {
            return Err(UpstreamError::NotFound(
                Upstream::Search,
                format!("{} document {}", index, id),
            ));
        }

        let mut source = body.get("_source").cloned().unwrap_or(Value::Null);
        if let Value::Object(map) = &mut source {
            if !map.contains_key("id") {
                map.insert("id".to_string(), Value::String(id.to_string()));
            }
        }

        Ok(source)
    }

    async fn post_json(&self, url: &str, body: &Value, index: &str) -> Result<Value, UpstreamError> {
        let response = self
            .authorize(self.http.post(url))
            .json(body)
            .send()
            .await
            .map_err(|e| UpstreamError::from_reqwest(Upstream::Search, e))?;

        Self::read_json(response, || format!("index {}", index)).await
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            Some(credentials) => {
                request.basic_auth(&credentials.username, credentials.password.as_ref())
            }
            None => request,
        }
    }

    async fn read_json(
        response: reqwest::Response,
        what: impl FnOnce() -> String,
    ) -> Result<Value, UpstreamError> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound(Upstream::Search, what()));
        }

        if !status.is_success() {
            return Err(UpstreamError::BadStatus(Upstream::Search, status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| UpstreamError::from_reqwest(Upstream::Search, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SearchClient {
        SearchClient::new(reqwest::Client::new(), "http://localhost:9200/", None)
    }

    #[tokio::test]
    async fn reuses_connector_per_index() {
        let client = client();

        let first = client.connector("data").await;
        let second = client.connector("data").await;
        let other = client.connector("task").await;

        assert!(Arc::ptr_eq(&first, &second));
        assert!(!Arc::ptr_eq(&first, &other));
    }

    #[tokio::test]
    async fn clones_share_the_cache() {
        let client = client();
        let clone = client.clone();

        let first = client.connector("flow").await;
        let second = clone.connector("flow").await;

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn connector_urls_use_trimmed_base() {
        let connector = client().connector("run").await;

        assert_eq!(connector.search_url, "http://localhost:9200/run/_search");
        assert_eq!(connector.doc_url, "http://localhost:9200/run/_doc");
    }

    #[tokio::test]
    async fn unreachable_cluster_is_unavailable() {
        let client = SearchClient::new(reqwest::Client::new(), "http://127.0.0.1:1", None);

        let result = client.search("data", &serde_json::json!({})).await;

        assert!(matches!(result, Err(UpstreamError::Unavailable(_, _))));
    }
}
