//! Catalog search proxied to Elasticsearch.

use serde_json::Value;

use crate::{
    model::search::{EntityKind, SearchRequestDto},
    server::{
        error::AppError,
        model::search::{SearchParam, SearchResults},
        search::{
            client::SearchClient,
            config::{index_config, is_known_index, IndexConfig, SortConfig},
            query::{build_search_body, parse_search_response},
        },
    },
};

/// Deepest hit reachable through paging, the cluster's default result window.
const MAX_RESULT_WINDOW: u64 = 10_000;

pub struct SearchService<'a> {
    pub search: &'a SearchClient,
}

impl<'a> SearchService<'a> {
    pub fn new(search: &'a SearchClient) -> Self {
        Self { search }
    }

    /// Runs a catalog search for one entity kind.
    ///
    /// # Returns
    /// - `Ok(SearchResults)` - Hits, totals and facet buckets
    /// - `Err(AppError::BadRequest(_))` - Filter on a non-facet field, unknown sort key or
    ///   page beyond the result window
    /// - `Err(AppError::UpstreamErr(_))` - Cluster unavailable (503) or failing (502)
    pub async fn search(
        &self,
        kind: EntityKind,
        request: SearchRequestDto,
    ) -> Result<SearchResults, AppError> {
        let param = SearchParam::from_dto(kind, request);
        let config = index_config(kind);
        let sort = validate(config, &param)?;

        let body = build_search_body(config, &param, sort);
        let response = self.search.search(config.index, &body).await?;

        Ok(parse_search_response(config, &param, response)?)
    }

    /// Forwards a raw query body to a catalog index and returns the response unchanged.
    ///
    /// # Returns
    /// - `Ok(Value)` - Cluster response
    /// - `Err(AppError::NotFound(_))` - Index is not one of the catalog indices
    /// - `Err(AppError::BadRequest(_))` - Body is not a JSON object
    /// - `Err(AppError::UpstreamErr(_))` - Cluster failure
    pub async fn passthrough(&self, index: &str, body: &Value) -> Result<Value, AppError> {
        if !is_known_index(index) {
            return Err(AppError::NotFound(format!("Unknown index {}", index)));
        }

        if !body.is_object() {
            return Err(AppError::BadRequest(
                "Search body must be a JSON object".to_string(),
            ));
        }

        Ok(self.search.search(index, body).await?)
    }
}

/// Checks filters, sort key and paging against the index settings and returns the sort
/// to apply.
fn validate<'c>(config: &'c IndexConfig, param: &SearchParam) -> Result<&'c SortConfig, AppError> {
    if let Some((field, _)) = param
        .filters
        .iter()
        .find(|(field, _)| config.facet(field).is_none())
    {
        return Err(AppError::BadRequest(format!(
            "Cannot filter {} on '{}'",
            param.kind.slug(),
            field
        )));
    }

    let sort_key = param.sort.as_deref().unwrap_or(config.default_sort);
    let sort = config.sort_option(sort_key).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Cannot sort {} by '{}'",
            param.kind.slug(),
            sort_key
        ))
    })?;

    if param.offset().saturating_add(param.per_page) > MAX_RESULT_WINDOW {
        return Err(AppError::BadRequest(format!(
            "Only the first {} results can be paged through, please refine the search",
            MAX_RESULT_WINDOW
        )));
    }

    Ok(sort)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::error::upstream::UpstreamError;
    use std::collections::HashMap;

    fn unreachable_client() -> SearchClient {
        SearchClient::new(reqwest::Client::new(), "http://127.0.0.1:1", None)
    }

    fn request() -> SearchRequestDto {
        SearchRequestDto {
            per_page: 20,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn rejects_filter_on_non_facet_field() {
        let client = unreachable_client();
        let service = SearchService::new(&client);

        let mut filters = HashMap::new();
        filters.insert("description".to_string(), vec!["x".to_string()]);

        let result = service
            .search(EntityKind::Dataset, SearchRequestDto { filters, ..request() })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn rejects_unknown_sort_key() {
        let client = unreachable_client();
        let service = SearchService::new(&client);

        let result = service
            .search(
                EntityKind::Task,
                SearchRequestDto {
                    sort: Some("likes_per_hour".to_string()),
                    ..request()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn rejects_pages_beyond_result_window() {
        let client = unreachable_client();
        let service = SearchService::new(&client);

        let result = service
            .search(
                EntityKind::Run,
                SearchRequestDto {
                    page: 500,
                    per_page: 100,
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn valid_request_reaches_the_cluster() {
        let client = unreachable_client();
        let service = SearchService::new(&client);

        let mut filters = HashMap::new();
        filters.insert("status".to_string(), vec!["active".to_string()]);

        let result = service
            .search(EntityKind::Dataset, SearchRequestDto { filters, ..request() })
            .await;

        assert!(matches!(
            result,
            Err(AppError::UpstreamErr(UpstreamError::Unavailable(_, _)))
        ));
    }

    #[tokio::test]
    async fn passthrough_rejects_unknown_index() {
        let client = unreachable_client();
        let service = SearchService::new(&client);

        let result = service.passthrough(".security", &serde_json::json!({})).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn passthrough_rejects_non_object_body() {
        let client = unreachable_client();
        let service = SearchService::new(&client);

        let result = service.passthrough("data", &serde_json::json!([1, 2])).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
