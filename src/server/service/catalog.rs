//! Detail data of catalog entities.
//!
//! Documents come from the search index, dataset features, qualities and statistics
//! from the external REST API. Both are passed through as JSON.

use serde_json::Value;

use crate::{
    model::{search::EntityKind, user::UserSummaryDto},
    server::{
        error::AppError,
        rest::RestClient,
        search::{
            client::SearchClient,
            config::index_config,
            query::{build_count_body, parse_count_response},
        },
    },
};

/// Dataset detail sections served by the REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSection {
    Features,
    Qualities,
    Statistics,
}

pub struct CatalogService<'a> {
    pub search: &'a SearchClient,
    pub rest: &'a RestClient,
}

impl<'a> CatalogService<'a> {
    pub fn new(search: &'a SearchClient, rest: &'a RestClient) -> Self {
        Self { search, rest }
    }

    /// Fetches one catalog document by id.
    ///
    /// # Returns
    /// - `Ok(Value)` - The document source with its `id`
    /// - `Err(AppError::BadRequest(_))` - Id is not a plain identifier
    /// - `Err(AppError::UpstreamErr(_))` - Missing document (404) or cluster failure
    pub async fn get_document(&self, kind: EntityKind, id: &str) -> Result<Value, AppError> {
        let id = id.trim();
        if id.is_empty()
            || !id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(AppError::BadRequest(format!(
                "'{}' is not a valid {} id",
                id,
                kind.slug()
            )));
        }

        let config = index_config(kind);

        Ok(self.search.get_document(config.index, id).await?)
    }

    pub async fn dataset_section(
        &self,
        dataset_id: u64,
        section: DatasetSection,
    ) -> Result<Value, AppError> {
        let value = match section {
            DatasetSection::Features => self.rest.dataset_features(dataset_id).await?,
            DatasetSection::Qualities => self.rest.dataset_qualities(dataset_id).await?,
            DatasetSection::Statistics => self.rest.dataset_statistics(dataset_id).await?,
        };

        Ok(value)
    }

    /// Number of datasets, flows and runs uploaded by a user.
    ///
    /// The three counts are requested concurrently.
    pub async fn user_summary(&self, user_id: i32) -> Result<UserSummaryDto, AppError> {
        let (datasets, flows, runs) = tokio::try_join!(
            self.count_owned(EntityKind::Dataset, user_id),
            self.count_owned(EntityKind::Flow, user_id),
            self.count_owned(EntityKind::Run, user_id),
        )?;

        Ok(UserSummaryDto {
            datasets,
            flows,
            runs,
        })
    }

    async fn count_owned(&self, kind: EntityKind, user_id: i32) -> Result<u64, AppError> {
        let config = index_config(kind);
        let Some(owner_field) = config.owner_field else {
            return Ok(0);
        };

        let response = self
            .search
            .count(config.index, &build_count_body(owner_field, user_id))
            .await?;

        Ok(parse_count_response(&response)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clients() -> (SearchClient, RestClient) {
        let http = reqwest::Client::new();
        (
            SearchClient::new(http.clone(), "http://127.0.0.1:1", None),
            RestClient::new(http, "http://127.0.0.1:1/api/v1/json"),
        )
    }

    #[tokio::test]
    async fn rejects_ids_with_path_characters() {
        let (search, rest) = clients();
        let service = CatalogService::new(&search, &rest);

        for id in ["", "../_search", "1/2", "a b"] {
            let result = service.get_document(EntityKind::Dataset, id).await;
            assert!(matches!(result, Err(AppError::BadRequest(_))), "{}", id);
        }
    }

    #[tokio::test]
    async fn unreachable_api_surfaces_upstream_error() {
        let (search, rest) = clients();
        let service = CatalogService::new(&search, &rest);

        let result = service
            .dataset_section(61, DatasetSection::Qualities)
            .await;

        assert!(matches!(result, Err(AppError::UpstreamErr(_))));
    }
}
